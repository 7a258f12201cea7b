// SPDX-License-Identifier: LGPL-3.0-or-later

//! Power/decibel conversion utilities.

/// Level reported for a bin whose squared magnitude is exactly zero.
pub const DB_FLOOR: f64 = -250.0;

/// Convert a squared magnitude to dB: `10*log10(p)`, or [`DB_FLOOR`] for `p == 0`.
#[inline]
pub fn power_to_db(p: f64) -> f64 {
    if p == 0.0 { DB_FLOOR } else { 10.0 * p.log10() }
}

/// Convert a buffer of squared magnitudes to dB.
pub fn power_to_db_buf(dst: &mut [f64], src: &[f64]) {
    for (d, &p) in dst.iter_mut().zip(src.iter()) {
        *d = power_to_db(p);
    }
}

/// Shift a dB curve so its maximum becomes exactly 0 dB.
///
/// Empty buffers are left untouched.
pub fn normalize_db(buf: &mut [f64]) {
    if buf.is_empty() {
        return;
    }
    let peak = crate::search::max(buf);
    for v in buf.iter_mut() {
        *v -= peak;
    }
}
