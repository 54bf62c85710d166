//! Error types for visage-stats

use thiserror::Error;

/// Errors raised while building columns or computing statistics
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// No numeric values were left to summarize
    #[error("column has no numeric values")]
    EmptyColumn,

    /// A value that is NaN or infinite reached a strict constructor
    #[error("non-finite value at index {index}")]
    NonFinite { index: usize },

    /// Quantile probability outside [0, 1]
    #[error("quantile must be within [0, 1], got {q}")]
    InvalidQuantile { q: f64 },
}

/// Result type alias for statistics operations
pub type StatsResult<T> = Result<T, StatsError>;
