// SPDX-License-Identifier: LGPL-3.0-or-later

//! Butterworth filter design and processing.
//!
//! - [`config`]: user-facing band edges, sample rate and order
//! - [`designer`]: configuration to cascade coefficients
//! - [`engine`]: per-sample cascade processing and delay-line state
//! - [`butterworth`]: the combined filter with setters and analysis queries

pub mod butterworth;
pub mod config;
pub mod designer;
pub mod engine;
