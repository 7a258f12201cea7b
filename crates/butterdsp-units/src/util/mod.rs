// SPDX-License-Identifier: LGPL-3.0-or-later

//! Analysis utilities.
//!
//! This module contains:
//! - Impulse-response analysis (filter delay, magnitude response)

pub mod response_analyzer;
