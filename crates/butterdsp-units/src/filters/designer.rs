// SPDX-License-Identifier: LGPL-3.0-or-later

//! Butterworth cascade design via the bilinear transform.
//!
//! [`design`] maps a [`FilterConfiguration`] to an immutable [`FilterDesign`]:
//! the filter mode plus one [`CascadeStage`] per section. Configurations that
//! cannot describe a stable filter are not errors; they produce a bypass
//! design so an interactive host keeps working with any input.
//!
//! Low-pass and high-pass use `(N + 1) / 2` second-order sections with
//! ```text
//!   a   = tan(pi * F / Fs)
//!   r_k = sin(pi * (2k + 1) / (4S))
//!   s_k = a^2 + 2*a*r_k + 1
//!   gain_k = a^2 / s_k  (lowpass)   or   1 / s_k  (highpass)
//!   c0 = 2 * (1 - a^2) / s_k
//!   c1 = -(a^2 - 2*a*r_k + 1) / s_k
//! ```
//! Band-pass uses `(N + 3) / 4` fourth-order sections with `F1 = Fhc`,
//! `F2 = Flc`:
//! ```text
//!   a   = cos(pi * (F1 + F2) / Fs) / cos(pi * (F2 - F1) / Fs)
//!   b   = tan(pi * (F2 - F1) / Fs)
//!   s_k = b^2 + 2*b*r_k + 1
//!   gain_k = b^2 / Fs
//!   c0 = 4*a*(1 + b*r_k) / s_k
//!   c1 = 2*(b^2 - 2*a^2 - 1) / s_k
//!   c2 = 4*a*(1 - b*r_k) / s_k
//!   c3 = -(b^2 - 2*b*r_k + 1) / s_k
//! ```

use std::f64::consts::PI;

use butterdsp_lib::types::{CascadeStage, SectionKind};
use tracing::debug;

use super::config::FilterConfiguration;

/// Operating mode of a designed filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    /// Pass-through. Used whenever the configuration is unusable.
    #[default]
    Bypass,
    /// Low-pass cascade at `Flc`.
    LowPass,
    /// High-pass cascade at `Fhc`.
    HighPass,
    /// Band-pass cascade between `Fhc` and `Flc`.
    BandPass,
}

impl FilterMode {
    /// Section shape for this mode, or `None` for bypass.
    pub const fn section_kind(self) -> Option<SectionKind> {
        match self {
            Self::Bypass => None,
            Self::LowPass => Some(SectionKind::Lowpass),
            Self::HighPass => Some(SectionKind::Highpass),
            Self::BandPass => Some(SectionKind::Bandpass),
        }
    }

    /// Whether this is the pass-through mode.
    pub const fn is_bypass(self) -> bool {
        matches!(self, Self::Bypass)
    }
}

/// Immutable result of [`design`].
///
/// The mode and the stage array are produced together and replaced together.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterDesign {
    mode: FilterMode,
    stages: Box<[CascadeStage]>,
}

impl FilterDesign {
    /// A pass-through design with no stages.
    pub fn bypass() -> Self {
        Self::default()
    }

    /// Filter mode.
    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Cascade stages in processing order.
    pub fn stages(&self) -> &[CascadeStage] {
        &self.stages
    }

    /// Number of cascade stages (0 in bypass).
    pub fn num_stages(&self) -> usize {
        self.stages.len()
    }

    /// Coefficients per stage (0 in bypass).
    pub fn num_coefs(&self) -> usize {
        self.mode.section_kind().map_or(0, SectionKind::n_coefs)
    }
}

/// Why a configuration degraded to bypass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BypassReason {
    NoSectionEnabled,
    ZeroOrder,
    LowCutoffOutOfRange,
    HighCutoffOutOfRange,
    InvalidBandEdges,
}

/// `0 < f <= Fs/2`. False for NaN inputs.
fn in_band(f: f64, nyquist: f64) -> bool {
    f > 0.0 && f <= nyquist
}

fn select_mode(cfg: &FilterConfiguration) -> Result<FilterMode, BypassReason> {
    if cfg.order == 0 {
        return Err(BypassReason::ZeroOrder);
    }
    let nyquist = cfg.nyquist();

    match (cfg.lowpass, cfg.highpass) {
        (true, true) => {
            let (f1, f2) = (cfg.high_cutoff, cfg.low_cutoff);
            if f1 > 0.0 && f1 < f2 && f2 < nyquist {
                Ok(FilterMode::BandPass)
            } else {
                Err(BypassReason::InvalidBandEdges)
            }
        }
        (true, false) if in_band(cfg.low_cutoff, nyquist) => Ok(FilterMode::LowPass),
        (true, false) => Err(BypassReason::LowCutoffOutOfRange),
        (false, true) if in_band(cfg.high_cutoff, nyquist) => Ok(FilterMode::HighPass),
        (false, true) => Err(BypassReason::HighCutoffOutOfRange),
        (false, false) => Err(BypassReason::NoSectionEnabled),
    }
}

/// Compute the cascade for a configuration.
///
/// Never fails: any configuration outside the valid ranges yields
/// [`FilterDesign::bypass`].
///
/// # Examples
/// ```
/// use butterdsp_units::filters::config::FilterConfiguration;
/// use butterdsp_units::filters::designer::{FilterMode, design};
///
/// let d = design(&FilterConfiguration::default());
/// assert_eq!(d.mode(), FilterMode::LowPass);
/// assert_eq!(d.num_stages(), 2);
/// assert_eq!(d.num_coefs(), 2);
/// ```
pub fn design(cfg: &FilterConfiguration) -> FilterDesign {
    let mode = match select_mode(cfg) {
        Ok(mode) => mode,
        Err(reason) => {
            debug!(?reason, order = cfg.order, "configuration degraded to bypass");
            return FilterDesign::bypass();
        }
    };

    let stages: Box<[CascadeStage]> = match mode {
        FilterMode::BandPass => bandpass_stages(cfg),
        FilterMode::LowPass => single_edge_stages(cfg.low_cutoff, cfg.sample_rate, cfg.order, true),
        FilterMode::HighPass => single_edge_stages(cfg.high_cutoff, cfg.sample_rate, cfg.order, false),
        FilterMode::Bypass => Box::default(),
    };

    debug!(
        ?mode,
        order = cfg.order,
        stages = stages.len(),
        coefs = mode.section_kind().map_or(0, SectionKind::n_coefs),
        "designed filter"
    );

    FilterDesign { mode, stages }
}

/// Pole angle term `r_k` for stage `k` of `n_stages`.
#[inline]
fn pole_term(k: usize, n_stages: usize) -> f64 {
    (PI * (2 * k + 1) as f64 / (4 * n_stages) as f64).sin()
}

/// Second-order low-pass or high-pass sections at cutoff `fc`.
fn single_edge_stages(fc: f64, fs: f64, order: usize, lowpass: bool) -> Box<[CascadeStage]> {
    let n_stages = order.div_ceil(2);
    let a = (PI * fc / fs).tan();
    let a2 = a * a;

    (0..n_stages)
        .map(|k| {
            let r = pole_term(k, n_stages);
            let s = a2 + 2.0 * a * r + 1.0;
            let gain = if lowpass { a2 / s } else { 1.0 / s };
            CascadeStage::second_order(
                gain,
                2.0 * (1.0 - a2) / s,
                -(a2 - 2.0 * a * r + 1.0) / s,
            )
        })
        .collect()
}

/// Fourth-order band-pass sections between `Fhc` and `Flc`.
fn bandpass_stages(cfg: &FilterConfiguration) -> Box<[CascadeStage]> {
    let n_stages = cfg.order.div_ceil(4);
    let fs = cfg.sample_rate;
    let (f1, f2) = (cfg.high_cutoff, cfg.low_cutoff);

    let a = (PI * (f1 + f2) / fs).cos() / (PI * (f2 - f1) / fs).cos();
    let a2 = a * a;
    let b = (PI * (f2 - f1) / fs).tan();
    let b2 = b * b;

    (0..n_stages)
        .map(|k| {
            let r = pole_term(k, n_stages);
            let s = b2 + 2.0 * b * r + 1.0;
            CascadeStage::fourth_order(
                b2 / fs,
                [
                    4.0 * a * (1.0 + b * r) / s,
                    2.0 * (b2 - 2.0 * a2 - 1.0) / s,
                    4.0 * a * (1.0 - b * r) / s,
                    -(b2 - 2.0 * b * r + 1.0) / s,
                ],
            )
        })
        .collect()
}
