// SPDX-License-Identifier: LGPL-3.0-or-later

//! Error types.

use thiserror::Error;

/// Errors returned by [`ResponseAnalyzer::analyze`](crate::util::response_analyzer::ResponseAnalyzer::analyze).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The requested FFT size is not a power of two of at least 2.
    #[error("analysis size {0} is not a power of two >= 2")]
    InvalidSize(usize),
}
