//! Error types for filterbank construction

use std::fmt;

/// Errors that can occur while building or applying a Mel filterbank
#[derive(Debug, Clone)]
pub enum FilterbankError {
    /// Invalid input parameters
    InvalidInput(String),

    /// Numerical error (non-finite weight, degenerate band width, etc.)
    NumericalError(String),
}

impl fmt::Display for FilterbankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterbankError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            FilterbankError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
        }
    }
}

impl std::error::Error for FilterbankError {}
