// SPDX-License-Identifier: LGPL-3.0-or-later

//! Configurable Butterworth low-pass / high-pass / band-pass filter.
//!
//! [`ButterworthFilter`] ties together the configuration, the designer, the
//! streaming engine and the response analyzer. Every setter that changes a
//! value redesigns the cascade, zeroes the filter state and drops any cached
//! analysis; setting a value to what it already is does nothing.
//!
//! Invalid settings never fail. They switch the filter to bypass, which is
//! observable through [`ButterworthFilter::mode`].

use tracing::debug;

use super::config::FilterConfiguration;
use super::designer::{FilterDesign, FilterMode, design};
use super::engine::{FilterEngine, FilterState};
use crate::consts::RESPONSE_TAPS;
use crate::util::response_analyzer::ResponseAnalyzer;

/// Cascaded Butterworth filter with delay and response queries.
///
/// # Examples
///
/// ```
/// use butterdsp_units::filters::butterworth::ButterworthFilter;
/// use butterdsp_units::filters::designer::FilterMode;
///
/// let mut filt = ButterworthFilter::new();
/// filt.set_sample_rate(48000.0)
///     .set_order(4)
///     .set_lowpass(true)
///     .set_highpass(true)
///     .set_high_cutoff(300.0)
///     .set_low_cutoff(3000.0);
/// assert_eq!(filt.mode(), FilterMode::BandPass);
///
/// let input = vec![1.0f64; 4096];
/// let mut output = vec![0.0f64; 4096];
/// filt.process(&mut output, &input);
///
/// let response = filt.frequency_response(64);
/// assert_eq!(response.len(), 64);
/// ```
#[derive(Debug, Clone)]
pub struct ButterworthFilter {
    config: FilterConfiguration,
    engine: FilterEngine,
    analyzer: ResponseAnalyzer,
}

impl Default for ButterworthFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl ButterworthFilter {
    /// Create a filter with the default configuration.
    ///
    /// Defaults: low-pass at 0.25 Hz, 1 Hz sample rate, order 4.
    pub fn new() -> Self {
        Self::with_configuration(FilterConfiguration::default())
    }

    /// Create a filter from a configuration.
    pub fn with_configuration(config: FilterConfiguration) -> Self {
        Self {
            config,
            engine: FilterEngine::new(design(&config)),
            analyzer: ResponseAnalyzer::new(),
        }
    }

    /// Replace the whole configuration, redesigning once if it changed.
    pub fn set_configuration(&mut self, config: FilterConfiguration) -> &mut Self {
        if config != self.config {
            self.config = config;
            self.redesign();
        }
        self
    }

    /// Enable or disable the low-pass section.
    pub fn set_lowpass(&mut self, enabled: bool) -> &mut Self {
        if self.config.lowpass != enabled {
            self.config.lowpass = enabled;
            self.redesign();
        }
        self
    }

    /// Enable or disable the high-pass section.
    pub fn set_highpass(&mut self, enabled: bool) -> &mut Self {
        if self.config.highpass != enabled {
            self.config.highpass = enabled;
            self.redesign();
        }
        self
    }

    /// Set the low-pass cutoff in Hz.
    pub fn set_low_cutoff(&mut self, freq: f64) -> &mut Self {
        if self.config.low_cutoff != freq {
            self.config.low_cutoff = freq;
            self.redesign();
        }
        self
    }

    /// Set the high-pass cutoff in Hz.
    pub fn set_high_cutoff(&mut self, freq: f64) -> &mut Self {
        if self.config.high_cutoff != freq {
            self.config.high_cutoff = freq;
            self.redesign();
        }
        self
    }

    /// Set the sample rate in Hz.
    pub fn set_sample_rate(&mut self, sr: f64) -> &mut Self {
        if self.config.sample_rate != sr {
            self.config.sample_rate = sr;
            self.redesign();
        }
        self
    }

    /// Set the filter order.
    pub fn set_order(&mut self, order: usize) -> &mut Self {
        if self.config.order != order {
            self.config.order = order;
            self.redesign();
        }
        self
    }

    fn redesign(&mut self) {
        debug!(config = ?self.config, "filter configuration changed");
        self.engine.install(design(&self.config));
        self.analyzer.invalidate();
    }

    /// Filter one sample.
    #[inline]
    pub fn apply(&mut self, x: f64) -> f64 {
        self.engine.apply(x)
    }

    /// Filter `src` into `dst`.
    pub fn process(&mut self, dst: &mut [f64], src: &[f64]) {
        self.engine.process(dst, src);
    }

    /// Filter a buffer in place.
    pub fn process_inplace(&mut self, buf: &mut [f64]) {
        self.engine.process_inplace(buf);
    }

    /// Clear the filter history.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Configured order, regardless of whether the filter is bypassed.
    pub fn order(&self) -> usize {
        self.config.order
    }

    /// Current configuration.
    pub fn configuration(&self) -> &FilterConfiguration {
        &self.config
    }

    /// Current mode.
    pub fn mode(&self) -> FilterMode {
        self.engine.mode()
    }

    /// Installed cascade.
    pub fn design(&self) -> &FilterDesign {
        self.engine.design()
    }

    /// Number of cascade stages (0 in bypass).
    pub fn num_stages(&self) -> usize {
        self.engine.design().num_stages()
    }

    /// Coefficients per stage (0 in bypass).
    pub fn num_coefs(&self) -> usize {
        self.engine.design().num_coefs()
    }

    /// Current delay-line state.
    pub fn state(&self) -> &FilterState {
        self.engine.state()
    }

    /// Approximate group delay in samples: the position of the impulse
    /// response peak. Computed on first query after a configuration change.
    pub fn filter_delay(&mut self) -> usize {
        self.analyzer.filter_delay(&mut self.engine)
    }

    /// Magnitude response in dB over `[0, pi)`, peak normalized to 0 dB.
    ///
    /// `num_points` is rounded up to a power of two. All zeros in bypass.
    pub fn frequency_response(&mut self, num_points: usize) -> &[f64] {
        self.analyzer.frequency_response(&mut self.engine, num_points)
    }

    /// Coarse 16-point magnitude response in whole dB, or `[0]` in bypass.
    pub fn response_taps(&mut self) -> Vec<i32> {
        if self.mode().is_bypass() {
            return vec![0];
        }
        self.frequency_response(RESPONSE_TAPS)
            .iter()
            .map(|&db| db.round() as i32)
            .collect()
    }
}
