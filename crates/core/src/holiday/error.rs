use thiserror::Error;

/// Errors that can occur when validating holiday details.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid date for {field}: {value} (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },
}
