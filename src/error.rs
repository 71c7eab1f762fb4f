//! Error types for the tau-filter library.

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: malformed feature token '{token}': {reason}")]
    Format {
        line: usize,
        token: String,
        reason: String,
    },

    #[error("Class size mismatch: {positive} positive vs {negative} negative records")]
    LengthMismatch { positive: usize, negative: usize },

    #[error("Pair {pair}: positive vector has {positive} dimensions, negative has {negative}")]
    DimensionMismatch {
        pair: usize,
        positive: usize,
        negative: usize,
    },

    #[error("Pair {pair}: positive component at dimension {dimension} is zero")]
    DegenerateVector { pair: usize, dimension: usize },

    #[error("CSV serialization error")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error")]
    Json(#[from] serde_json::Error),
}

impl FilterError {
    /// Process exit status reported for this failure kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            FilterError::Io(_) | FilterError::Csv(_) | FilterError::Json(_) => 3,
            FilterError::Format { .. } => 4,
            FilterError::LengthMismatch { .. } => 5,
            FilterError::DimensionMismatch { .. } => 6,
            FilterError::DegenerateVector { .. } => 7,
        }
    }
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, FilterError>;
