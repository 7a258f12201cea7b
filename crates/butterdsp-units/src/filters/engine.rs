// SPDX-License-Identifier: LGPL-3.0-or-later

//! Streaming cascade engine.
//!
//! [`FilterEngine`] owns the current [`FilterDesign`] and the delay lines that
//! go with it. Installing a new design replaces both at once, so the state
//! always has exactly one delay line per stage.

use butterdsp_lib::filters::{cascade_clear, cascade_process, cascade_process_inplace, cascade_step};
use butterdsp_lib::types::StageDelay;
use tracing::trace;

use super::designer::{FilterDesign, FilterMode};

/// Delay-line state of every stage in a cascade.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    delays: Vec<StageDelay>,
}

impl FilterState {
    /// All-zero state for `n_stages` stages.
    pub fn zeroed(n_stages: usize) -> Self {
        Self {
            delays: vec![StageDelay::default(); n_stages],
        }
    }

    /// Number of stages this state belongs to.
    pub fn num_stages(&self) -> usize {
        self.delays.len()
    }

    /// Per-stage delay lines.
    pub fn delays(&self) -> &[StageDelay] {
        &self.delays
    }

    /// Whether every tap of every stage is zero.
    pub fn is_clear(&self) -> bool {
        self.delays.iter().all(StageDelay::is_clear)
    }
}

/// Applies a designed cascade one sample (or one buffer) at a time.
///
/// # Examples
/// ```
/// use butterdsp_units::filters::config::FilterConfiguration;
/// use butterdsp_units::filters::designer::design;
/// use butterdsp_units::filters::engine::FilterEngine;
///
/// let mut engine = FilterEngine::new(design(&FilterConfiguration::default()));
/// let mut y = 0.0;
/// for _ in 0..200 {
///     y = engine.apply(1.0);
/// }
/// assert!((y - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    design: FilterDesign,
    state: FilterState,
}

impl FilterEngine {
    /// Create an engine running `design` from a zero state.
    pub fn new(design: FilterDesign) -> Self {
        let state = FilterState::zeroed(design.num_stages());
        Self { design, state }
    }

    /// Replace the design and zero the state.
    pub fn install(&mut self, design: FilterDesign) {
        self.state = FilterState::zeroed(design.num_stages());
        self.design = design;
    }

    /// Currently installed design.
    pub fn design(&self) -> &FilterDesign {
        &self.design
    }

    /// Mode of the installed design.
    pub fn mode(&self) -> FilterMode {
        self.design.mode()
    }

    /// Current delay-line state.
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Filter one sample. Identity in bypass mode.
    #[inline]
    pub fn apply(&mut self, x: f64) -> f64 {
        match self.design.mode().section_kind() {
            Some(kind) => cascade_step(kind, self.design.stages(), &mut self.state.delays, x),
            None => x,
        }
    }

    /// Filter `src` into `dst`, equivalent to calling [`apply`](Self::apply)
    /// per sample. Processes `min(dst.len(), src.len())` samples.
    pub fn process(&mut self, dst: &mut [f64], src: &[f64]) {
        let n = dst.len().min(src.len());
        match self.design.mode().section_kind() {
            Some(kind) => cascade_process(
                &mut dst[..n],
                &src[..n],
                kind,
                self.design.stages(),
                &mut self.state.delays,
            ),
            None => dst[..n].copy_from_slice(&src[..n]),
        }
    }

    /// Filter a buffer in place.
    pub fn process_inplace(&mut self, buf: &mut [f64]) {
        if let Some(kind) = self.design.mode().section_kind() {
            cascade_process_inplace(buf, kind, self.design.stages(), &mut self.state.delays);
        }
    }

    /// Zero every delay line. Coefficients are untouched.
    pub fn reset(&mut self) {
        trace!(stages = self.state.num_stages(), "filter state reset");
        cascade_clear(&mut self.state.delays);
    }

    /// Copy the current state into `dst`, reusing its allocation.
    pub fn save_state(&self, dst: &mut FilterState) {
        dst.delays.clone_from(&self.state.delays);
    }

    /// Overwrite the current state with a snapshot taken from this design.
    ///
    /// # Panics
    /// If `src` has a different stage count than the installed design.
    pub fn restore_state(&mut self, src: &FilterState) {
        assert_eq!(
            src.num_stages(),
            self.design.num_stages(),
            "state snapshot does not match the installed design"
        );
        self.state.delays.copy_from_slice(&src.delays);
    }
}
