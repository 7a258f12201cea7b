// SPDX-License-Identifier: LGPL-3.0-or-later

//! In-place radix-2 decimation-in-time FFT on split real/imaginary buffers.
//!
//! The transform is unnormalized: `X[k] = sum_t x[t] * exp(-2*pi*i*k*t/N)`.
//! Buffer lengths must be equal and a power of two. The API keeps the split
//! re/im layout used throughout this crate rather than interleaved complex
//! values.

use std::f64::consts::PI;

use num_complex::Complex;

/// Whether `n` is a usable analysis FFT size (a power of two, at least 2).
#[inline]
pub fn is_fft_size(n: usize) -> bool {
    n >= 2 && n.is_power_of_two()
}

/// Reorder both buffers into bit-reversed index order.
///
/// # Panics
/// If the buffers differ in length or the length is not a power of two.
pub fn bit_reverse_permute(re: &mut [f64], im: &mut [f64]) {
    let n = re.len();
    assert_eq!(n, im.len(), "re/im length mismatch");
    assert!(n.is_power_of_two(), "FFT length {n} is not a power of two");
    if n < 2 {
        return;
    }

    let shift = usize::BITS - n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> shift;
        if j > i {
            re.swap(i, j);
            im.swap(i, j);
        }
    }
}

/// Forward FFT in place.
///
/// Bit-reverses the input, then runs `log2(N)` butterfly passes with the
/// butterfly span doubling each pass. Within a pass of group size `2*span`,
/// element `k` of each group pairs with element `k + span` using the twiddle
/// `exp(-2*pi*i*k / (2*span))`.
///
/// # Panics
/// If the buffers differ in length or the length is not a power of two.
///
/// # Examples
/// ```
/// use butterdsp_lib::fft::fft_radix2;
///
/// let mut re = vec![1.0, 0.0, 0.0, 0.0];
/// let mut im = vec![0.0; 4];
/// fft_radix2(&mut re, &mut im);
/// // An impulse has a flat spectrum.
/// assert!(re.iter().all(|&v| (v - 1.0).abs() < 1e-12));
/// ```
pub fn fft_radix2(re: &mut [f64], im: &mut [f64]) {
    bit_reverse_permute(re, im);

    let n = re.len();
    let mut span = 1;
    while span < n {
        let group = span * 2;
        for k in 0..span {
            let twiddle = Complex::from_polar(1.0, -2.0 * PI * k as f64 / group as f64);
            for i in (k..n).step_by(group) {
                let j = i + span;
                let even = Complex::new(re[i], im[i]);
                let odd = twiddle * Complex::new(re[j], im[j]);
                let sum = even + odd;
                let diff = even - odd;
                re[i] = sum.re;
                im[i] = sum.im;
                re[j] = diff.re;
                im[j] = diff.im;
            }
        }
        span = group;
    }
}
