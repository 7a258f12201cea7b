// SPDX-License-Identifier: LGPL-3.0-or-later

//! # butterdsp-lib
//!
//! Low-level primitives for cascaded Butterworth filtering.
//!
//! This crate provides the building blocks used by `butterdsp-units` to
//! design, run and analyze filters. It includes:
//!
//! - **Types**: cascade stages and their delay lines
//! - **Filters**: the per-sample cascade recurrence and block wrappers
//! - **FFT**: in-place radix-2 decimation-in-time transform
//! - **Complex**: squared magnitude on split re/im arrays
//! - **Search**: maximum and first-occurrence peak index
//! - **Float**: power to dB conversion with a fixed floor, dB normalization
//!
//! ## Design
//!
//! All arithmetic is `f64`. Buffer loops use runtime SIMD dispatch via the
//! `multiversion` crate. The FFT is self-contained so it can be validated
//! against a direct DFT independently of any filter.

pub mod complex;
pub mod fft;
pub mod filters;
pub mod float;
pub mod search;
pub mod types;
