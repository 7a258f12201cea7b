// SPDX-License-Identifier: LGPL-3.0-or-later

//! Buffer search operations.

/// Find the maximum value in a buffer.
///
/// NaN entries are ignored. Returns `f64::NEG_INFINITY` for an empty buffer.
pub fn max(src: &[f64]) -> f64 {
    src.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Find the index of the maximum absolute value.
///
/// Ties resolve to the first occurrence. Returns `0` for an empty buffer.
pub fn iabs_max(src: &[f64]) -> usize {
    let mut idx = 0;
    let mut val = 0.0f64;
    for (i, &x) in src.iter().enumerate() {
        let a = x.abs();
        if a > val {
            val = a;
            idx = i;
        }
    }
    idx
}
