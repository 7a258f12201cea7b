// SPDX-License-Identifier: LGPL-3.0-or-later

//! Core data types for cascaded filter sections.
//!
//! A cascade is a slice of [`CascadeStage`] coefficients paired with a slice
//! of [`StageDelay`] lines of the same length. Both use fixed-capacity arrays
//! so a stage and its delay line can never disagree about their width; the
//! active width is given by the [`SectionKind`] of the cascade.

/// Maximum number of coefficients (and delay taps) in a single stage.
pub const MAX_COEFS: usize = 4;

/// Shape of the sections in a cascade.
///
/// Low-pass and high-pass cascades are built from second-order sections with
/// two feedback coefficients. Band-pass cascades use fourth-order sections
/// with four feedback coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Second-order low-pass section.
    Lowpass,
    /// Second-order high-pass section.
    Highpass,
    /// Fourth-order band-pass section.
    Bandpass,
}

impl SectionKind {
    /// Number of active coefficients (and delay taps) per stage.
    pub const fn n_coefs(self) -> usize {
        match self {
            Self::Lowpass | Self::Highpass => 2,
            Self::Bandpass => 4,
        }
    }
}

/// Coefficients of one cascade stage.
///
/// Only the first [`SectionKind::n_coefs`] entries of `coef` are used; the
/// remainder stay zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CascadeStage {
    /// Output gain of the stage.
    pub gain: f64,
    /// Feedback coefficients applied to the delay taps.
    pub coef: [f64; MAX_COEFS],
}

impl CascadeStage {
    /// Build a two-coefficient stage.
    pub const fn second_order(gain: f64, c0: f64, c1: f64) -> Self {
        Self {
            gain,
            coef: [c0, c1, 0.0, 0.0],
        }
    }

    /// Build a four-coefficient stage.
    pub const fn fourth_order(gain: f64, coef: [f64; MAX_COEFS]) -> Self {
        Self { gain, coef }
    }
}

/// Delay line of one cascade stage.
///
/// `w[0]` holds the most recent accumulator value, `w[1]` the one before it,
/// and so on.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StageDelay {
    pub w: [f64; MAX_COEFS],
}

impl StageDelay {
    /// Zero all taps.
    #[inline]
    pub fn reset(&mut self) {
        self.w = [0.0; MAX_COEFS];
    }

    /// Whether every tap is exactly zero.
    pub fn is_clear(&self) -> bool {
        self.w.iter().all(|&v| v == 0.0)
    }
}
