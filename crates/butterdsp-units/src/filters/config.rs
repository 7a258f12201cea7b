// SPDX-License-Identifier: LGPL-3.0-or-later

//! User-facing filter configuration.
//!
//! The configuration is plain data. Whether it describes a usable filter is
//! decided by [`design`](super::designer::design), which degrades invalid
//! combinations to bypass instead of rejecting them.

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_HIGH_CUTOFF, DEFAULT_LOW_CUTOFF, DEFAULT_ORDER, DEFAULT_SAMPLE_RATE,
};

/// Band edges, sample rate and order of a Butterworth filter.
///
/// The low cutoff is the upper edge of the pass band (where the low-pass
/// section rolls off) and the high cutoff the lower edge, so a band-pass
/// needs `high_cutoff < low_cutoff`.
///
/// Missing fields deserialize to their defaults:
///
/// ```
/// use butterdsp_units::filters::config::FilterConfiguration;
///
/// let cfg: FilterConfiguration =
///     serde_json::from_str(r#"{ "highpass": true, "order": 8 }"#).unwrap();
/// assert!(cfg.lowpass && cfg.highpass);
/// assert_eq!(cfg.order, 8);
/// assert_eq!(cfg.sample_rate, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfiguration {
    /// Low-pass section enabled.
    pub lowpass: bool,
    /// High-pass section enabled.
    pub highpass: bool,
    /// Low-pass cutoff `Flc`, in Hz.
    pub low_cutoff: f64,
    /// High-pass cutoff `Fhc`, in Hz.
    pub high_cutoff: f64,
    /// Sample rate `Fs`, in Hz.
    pub sample_rate: f64,
    /// Filter order `N`.
    pub order: usize,
}

impl Default for FilterConfiguration {
    fn default() -> Self {
        Self {
            lowpass: true,
            highpass: false,
            low_cutoff: DEFAULT_LOW_CUTOFF,
            high_cutoff: DEFAULT_HIGH_CUTOFF,
            sample_rate: DEFAULT_SAMPLE_RATE,
            order: DEFAULT_ORDER,
        }
    }
}

impl FilterConfiguration {
    /// Create a configuration with default settings.
    ///
    /// Defaults: low-pass only, `Flc = 0.25`, `Fhc = 0.35`, `Fs = 1.0`, order 4.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the low-pass section.
    pub fn set_lowpass(&mut self, enabled: bool) -> &mut Self {
        self.lowpass = enabled;
        self
    }

    /// Enable or disable the high-pass section.
    pub fn set_highpass(&mut self, enabled: bool) -> &mut Self {
        self.highpass = enabled;
        self
    }

    /// Set the low-pass cutoff in Hz.
    pub fn set_low_cutoff(&mut self, freq: f64) -> &mut Self {
        self.low_cutoff = freq;
        self
    }

    /// Set the high-pass cutoff in Hz.
    pub fn set_high_cutoff(&mut self, freq: f64) -> &mut Self {
        self.high_cutoff = freq;
        self
    }

    /// Set the sample rate in Hz.
    pub fn set_sample_rate(&mut self, sr: f64) -> &mut Self {
        self.sample_rate = sr;
        self
    }

    /// Set the filter order.
    pub fn set_order(&mut self, order: usize) -> &mut Self {
        self.order = order;
        self
    }

    /// Nyquist frequency, `Fs / 2`.
    pub fn nyquist(&self) -> f64 {
        self.sample_rate / 2.0
    }
}
