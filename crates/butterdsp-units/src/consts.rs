// SPDX-License-Identifier: LGPL-3.0-or-later

//! Default parameters and analysis constants.

/// FFT size used when only the filter delay is requested.
pub const DEFAULT_ANALYSIS_SIZE: usize = 256;

/// Number of points in the coarse integer response returned by
/// [`ButterworthFilter::response_taps`](crate::filters::butterworth::ButterworthFilter::response_taps).
pub const RESPONSE_TAPS: usize = 16;

/// Default low-pass cutoff, in Hz.
pub const DEFAULT_LOW_CUTOFF: f64 = 0.25;

/// Default high-pass cutoff, in Hz.
pub const DEFAULT_HIGH_CUTOFF: f64 = 0.35;

/// Default sample rate, in Hz. With `Fs = 1` cutoffs read as normalized frequencies.
pub const DEFAULT_SAMPLE_RATE: f64 = 1.0;

/// Default filter order.
pub const DEFAULT_ORDER: usize = 4;
