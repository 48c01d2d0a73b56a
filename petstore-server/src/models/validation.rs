//! Validation error types

use std::fmt;

/// Validation error for request payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is absent or null
    Missing { field: &'static str },

    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Integer field is below its allowed minimum
    Negative { field: &'static str },

    /// Body could not be decoded as the expected JSON shape
    MalformedBody { reason: String },

    /// Path parameter identifying the pet is absent
    MissingId,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::Negative { field } => write!(f, "{} cannot be negative", field),
            Self::MalformedBody { reason } => write!(f, "malformed body: {}", reason),
            Self::MissingId => write!(f, "missing pet ID"),
        }
    }
}

impl std::error::Error for ValidationError {}
