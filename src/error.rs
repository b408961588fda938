//! Error types for everything around the projection core
//!
//! The engine itself never fails; these cover loading, validation and export.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UnderwritingError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid deal JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {field} ({reason})")]
    InvalidInput { field: String, reason: String },
}

impl UnderwritingError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        UnderwritingError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, UnderwritingError>;
