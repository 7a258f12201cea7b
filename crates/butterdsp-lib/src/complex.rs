// SPDX-License-Identifier: LGPL-3.0-or-later

//! Complex helpers on split real/imaginary arrays.

use multiversion::multiversion;

/// Squared complex magnitude: `dst[i] = re[i]^2 + im[i]^2`.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn complex_mod_sq(dst: &mut [f64], re: &[f64], im: &[f64]) {
    for ((d, &r), &i) in dst.iter_mut().zip(re.iter()).zip(im.iter()) {
        *d = r * r + i * i;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_complex_mod_sq() {
        let re = [3.0, 0.0, -1.0];
        let im = [4.0, 0.0, 1.0];
        let mut dst = [0.0; 3];
        complex_mod_sq(&mut dst, &re, &im);
        assert_approx_eq!(f64, dst[0], 25.0, ulps = 2);
        assert_eq!(dst[1], 0.0);
        assert_approx_eq!(f64, dst[2], 2.0, ulps = 2);
    }

    #[test]
    fn test_processes_shortest_length() {
        let mut dst = [-1.0; 4];
        complex_mod_sq(&mut dst, &[1.0, 2.0], &[0.0, 0.0]);
        assert_eq!(dst, [1.0, 4.0, -1.0, -1.0]);
    }
}
