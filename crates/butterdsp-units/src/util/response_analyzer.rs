// SPDX-License-Identifier: LGPL-3.0-or-later

//! Impulse-response analysis of a filter engine.
//!
//! Drives a [`FilterEngine`] with a unit impulse, takes the index of the
//! largest output sample as the filter delay, and optionally runs a radix-2
//! FFT over the captured response to produce a magnitude curve in dB,
//! normalized so its peak is 0 dB.
//!
//! The engine's live state is saved before the impulse run and restored
//! afterwards, so analysis does not disturb a signal being filtered.

use butterdsp_lib::complex::complex_mod_sq;
use butterdsp_lib::fft::{fft_radix2, is_fft_size};
use butterdsp_lib::float::{normalize_db, power_to_db_buf};
use butterdsp_lib::search::iabs_max;
use tracing::debug;

use crate::consts::DEFAULT_ANALYSIS_SIZE;
use crate::error::AnalysisError;
use crate::filters::engine::{FilterEngine, FilterState};

/// Result of one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyResponse {
    /// FFT size (impulse length) used.
    pub fft_size: usize,
    /// Index of the impulse-response sample with the largest magnitude.
    pub filter_delay: usize,
    /// `fft_size / 2` bins spanning `[0, pi)`, in dB relative to the peak.
    /// `None` when only the delay was requested.
    pub magnitude_db: Option<Vec<f64>>,
}

/// FFT size needed to return `num_points` response bins.
///
/// Rounds `num_points` up to a power of two and doubles it, since only the
/// lower half of the spectrum is reported. Zero is treated as one.
pub fn analysis_size_for(num_points: usize) -> usize {
    num_points.max(1).next_power_of_two() * 2
}

/// Impulse-response analyzer with lazily cached results.
///
/// The cached delay and response belong to whatever design was installed
/// when they were computed; call [`invalidate`](Self::invalidate) whenever
/// the engine's design changes.
#[derive(Debug, Clone, Default)]
pub struct ResponseAnalyzer {
    /// Engine state saved across the impulse run.
    saved: FilterState,
    /// Captured impulse response.
    capture: Vec<f64>,
    /// FFT scratch, real part.
    re: Vec<f64>,
    /// FFT scratch, imaginary part.
    im: Vec<f64>,
    /// Squared magnitudes of the lower half spectrum.
    power: Vec<f64>,
    /// Cached delay from the default-size analysis.
    delay: Option<usize>,
    /// Cached full analysis.
    response: Option<FrequencyResponse>,
}

impl ResponseAnalyzer {
    /// Create an analyzer with empty caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop cached results so the next query re-runs the analysis.
    pub fn invalidate(&mut self) {
        if self.delay.is_some() || self.response.is_some() {
            debug!("response analysis invalidated");
        }
        self.delay = None;
        self.response = None;
    }

    /// Whether no cached result is held.
    pub fn is_stale(&self) -> bool {
        self.delay.is_none() && self.response.is_none()
    }

    /// Run an analysis of size `fft_size` against `engine`.
    ///
    /// The engine's state is the same after the call as before it. Results
    /// are not cached.
    ///
    /// # Errors
    /// [`AnalysisError::InvalidSize`] if `fft_size` is not a power of two of
    /// at least 2.
    pub fn analyze(
        &mut self,
        engine: &mut FilterEngine,
        fft_size: usize,
        compute_spectrum: bool,
    ) -> Result<FrequencyResponse, AnalysisError> {
        if !is_fft_size(fft_size) {
            return Err(AnalysisError::InvalidSize(fft_size));
        }
        Ok(self.run(engine, fft_size, compute_spectrum))
    }

    /// Filter delay in samples, from a delay-only analysis of
    /// [`DEFAULT_ANALYSIS_SIZE`] points. Cached until invalidated.
    pub fn filter_delay(&mut self, engine: &mut FilterEngine) -> usize {
        if let Some(delay) = self.delay {
            return delay;
        }
        let delay = self.run(engine, DEFAULT_ANALYSIS_SIZE, false).filter_delay;
        self.delay = Some(delay);
        delay
    }

    /// Normalized magnitude response with `num_points` rounded up to a power
    /// of two bins over `[0, pi)`. Cached per size until invalidated.
    ///
    /// In bypass mode every bin is 0 dB.
    pub fn frequency_response(&mut self, engine: &mut FilterEngine, num_points: usize) -> &[f64] {
        let fft_size = analysis_size_for(num_points);
        let cached = matches!(&self.response, Some(r) if r.fft_size == fft_size);
        if !cached {
            self.response = Some(self.run(engine, fft_size, true));
        }
        self.response
            .as_ref()
            .and_then(|r| r.magnitude_db.as_deref())
            .unwrap_or(&[])
    }

    /// Analysis proper. `fft_size` must already be validated.
    fn run(
        &mut self,
        engine: &mut FilterEngine,
        fft_size: usize,
        compute_spectrum: bool,
    ) -> FrequencyResponse {
        debug_assert!(is_fft_size(fft_size));

        if engine.mode().is_bypass() {
            // The identity has a unit impulse response: no delay, flat spectrum.
            return FrequencyResponse {
                fft_size,
                filter_delay: 0,
                magnitude_db: compute_spectrum.then(|| vec![0.0; fft_size / 2]),
            };
        }

        self.capture.clear();
        self.capture.resize(fft_size, 0.0);
        self.capture[0] = 1.0;

        engine.save_state(&mut self.saved);
        engine.reset();
        engine.process_inplace(&mut self.capture);
        engine.restore_state(&self.saved);

        let filter_delay = iabs_max(&self.capture);
        let magnitude_db = if compute_spectrum {
            Some(self.spectrum_db())
        } else {
            None
        };

        debug!(
            fft_size,
            filter_delay,
            spectrum = compute_spectrum,
            mode = ?engine.mode(),
            "impulse response analyzed"
        );

        FrequencyResponse {
            fft_size,
            filter_delay,
            magnitude_db,
        }
    }

    /// FFT of the captured response, lower half, in dB relative to the peak.
    fn spectrum_db(&mut self) -> Vec<f64> {
        let n = self.capture.len();
        let half = n / 2;

        self.re.clear();
        self.re.extend_from_slice(&self.capture);
        self.im.clear();
        self.im.resize(n, 0.0);
        fft_radix2(&mut self.re, &mut self.im);

        self.power.resize(half, 0.0);
        complex_mod_sq(&mut self.power, &self.re[..half], &self.im[..half]);

        let mut db = vec![0.0; half];
        power_to_db_buf(&mut db, &self.power);
        normalize_db(&mut db);
        db
    }
}
