//! Pure functions for serializing holidays to and from cache bytes.
//!
//! Values are stored as a JSON array of full records (including `id`), which
//! keeps the cache human-readable and easy to inspect.

use crate::holiday::HolidayRecord;
use thiserror::Error;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a slice of holidays to JSON bytes.
pub fn serialize_holidays(holidays: &[HolidayRecord]) -> Result<Vec<u8>> {
    serde_json::to_vec(holidays).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a vector of holidays.
pub fn deserialize_holidays(bytes: &[u8]) -> Result<Vec<HolidayRecord>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
