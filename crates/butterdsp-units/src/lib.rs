// SPDX-License-Identifier: LGPL-3.0-or-later

//! # butterdsp-units
//!
//! Butterworth filtering components built on top of [`butterdsp_lib`].
//! It includes:
//!
//! - **Filters**: configuration, coefficient design, streaming engine and
//!   the combined [`ButterworthFilter`](filters::butterworth::ButterworthFilter)
//! - **Utilities**: impulse-response analysis for filter delay and
//!   normalized magnitude response
//!
//! ## Behavior
//!
//! Everything is synchronous and single-threaded. Invalid configurations
//! put the filter in bypass rather than returning errors; the only fallible
//! operation is a direct analysis request with a bad FFT size. Diagnostic
//! events are emitted through `tracing` and are silent unless the host
//! installs a subscriber.

pub mod consts;
pub mod error;
pub mod filters;
pub mod util;
