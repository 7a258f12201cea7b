// SPDX-License-Identifier: LGPL-3.0-or-later

//! Cascaded recursive filter processing.
//!
//! Each stage runs the direct-form recurrence
//! ```text
//!   w0 = x + c[0]*w[0] + c[1]*w[1] (+ c[2]*w[2] + c[3]*w[3])
//!   y  = gain * (w0 + 2*w[0] + w[1])      lowpass
//!   y  = gain * (w0 - 2*w[0] + w[1])      highpass
//!   y  = gain * (w0 - 2*w[1] + w[3])      bandpass
//!   w  = [w0, w[0], w[1], ...]
//! ```
//! and `y` feeds the next stage. The output of the last stage is the cascade
//! output.
//!
//! The output combination reads the delay taps *before* the shift, so the
//! numerator sees the same history the accumulator did.

use multiversion::multiversion;

use crate::types::{CascadeStage, SectionKind, StageDelay};

/// Run one stage on one sample, updating its delay line.
#[inline(always)]
fn stage_step(kind: SectionKind, stage: &CascadeStage, d: &mut StageDelay, x: f64) -> f64 {
    let n = kind.n_coefs();
    let w = &mut d.w;

    let mut w0 = x;
    for j in 0..n {
        w0 += stage.coef[j] * w[j];
    }

    let y = match kind {
        SectionKind::Lowpass => stage.gain * (w0 + 2.0 * w[0] + w[1]),
        SectionKind::Highpass => stage.gain * (w0 - 2.0 * w[0] + w[1]),
        SectionKind::Bandpass => stage.gain * (w0 - 2.0 * w[1] + w[3]),
    };

    w.copy_within(0..n - 1, 1);
    w[0] = w0;
    y
}

/// Push one sample through the cascade and return the output of the last stage.
///
/// `stages` and `delays` must have the same length. An empty cascade returns
/// `x` unchanged.
#[inline]
pub fn cascade_step(
    kind: SectionKind,
    stages: &[CascadeStage],
    delays: &mut [StageDelay],
    x: f64,
) -> f64 {
    debug_assert_eq!(stages.len(), delays.len(), "stage/delay count mismatch");
    stages
        .iter()
        .zip(delays.iter_mut())
        .fold(x, |signal, (stage, d)| stage_step(kind, stage, d, signal))
}

/// Process a buffer through the cascade: `dst[i] = cascade_step(src[i])`.
///
/// Processes `min(dst.len(), src.len())` samples.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn cascade_process(
    dst: &mut [f64],
    src: &[f64],
    kind: SectionKind,
    stages: &[CascadeStage],
    delays: &mut [StageDelay],
) {
    for (out, &inp) in dst.iter_mut().zip(src.iter()) {
        *out = cascade_step(kind, stages, delays, inp);
    }
}

/// Process a buffer through the cascade in place.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn cascade_process_inplace(
    buf: &mut [f64],
    kind: SectionKind,
    stages: &[CascadeStage],
    delays: &mut [StageDelay],
) {
    for sample in buf.iter_mut() {
        *sample = cascade_step(kind, stages, delays, *sample);
    }
}

/// Zero every delay line of a cascade.
pub fn cascade_clear(delays: &mut [StageDelay]) {
    for d in delays.iter_mut() {
        d.reset();
    }
}
