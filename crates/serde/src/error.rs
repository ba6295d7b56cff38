//! Error types for FHIR JSON decoding and encoding.

use meridian_serde_support::DecodeError;
use thiserror::Error;

/// Errors returned by the codec entry points.
#[derive(Debug, Error)]
pub enum SerdeError {
    /// The input is not JSON, or a JSON tree could not be written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input is JSON but not a valid instance of the target type.
    #[error("FHIR decode error: {0}")]
    Decode(#[from] DecodeError),
}

impl SerdeError {
    /// JSON-pointer location of a decode failure.
    pub fn path(&self) -> Option<&str> {
        match self {
            SerdeError::Decode(err) => Some(&err.path),
            SerdeError::Json(_) => None,
        }
    }

    pub fn as_decode(&self) -> Option<&DecodeError> {
        match self {
            SerdeError::Decode(err) => Some(err),
            SerdeError::Json(_) => None,
        }
    }
}

/// Result type alias for FHIR serialization operations
pub type Result<T> = std::result::Result<T, SerdeError>;
