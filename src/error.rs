//! Unified error hierarchy for splitrs.
//!
//! The library surfaces `SplitError` everywhere; the binary wraps it in
//! `anyhow` at the top level.

use thiserror::Error;

/// Top-level error type for all splitrs operations
#[derive(Debug, Error)]
pub enum SplitError {
    /// Timestamp string is not three colon-separated integer fields
    #[error("invalid duration string: {value:?}")]
    Format { value: String },

    /// Input table is missing a required column
    #[error("missing required column: {column}")]
    MissingColumn { column: String },

    /// CSV read/write errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Data validation errors
    #[error("validation error: {0}")]
    Validation(String),
}

/// Result type alias for splitrs operations
pub type Result<T> = std::result::Result<T, SplitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_display() {
        let err = SplitError::Format {
            value: "4:00".to_string(),
        };
        assert!(err.to_string().contains("4:00"));
    }

    #[test]
    fn test_missing_column_display() {
        let err = SplitError::MissingColumn {
            column: "half.time".to_string(),
        };
        assert_eq!(err.to_string(), "missing required column: half.time");
    }
}
