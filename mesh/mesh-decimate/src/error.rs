//! Error types for mesh decimation.

use thiserror::Error;

/// Result type for decimation operations.
pub type DecimateResult<T> = std::result::Result<T, DecimateError>;

/// Errors that can occur during decimation.
#[derive(Debug, Error)]
pub enum DecimateError {
    /// Reduction fraction outside the valid range.
    #[error("invalid reduction fraction {0}, must be in [0.0, 1.0)")]
    InvalidReduction(f64),
}
