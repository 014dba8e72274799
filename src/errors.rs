use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured validation/build error raised by constructors and builders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "{}: {}", field, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Convenience alias for fallible record operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Unified error type surfaced by the crate.
///
/// Only hard failures show up here. Type mismatches and out-of-set enum values
/// are absorbed into [`Record::Unparsed`](crate::Record::Unparsed) unless
/// [`Config::strict`](crate::Config::strict) is enabled.
#[derive(Debug, Error)]
pub enum Error {
    /// A field the schema marks as required was absent or null.
    #[error("required field {field} missing")]
    MissingField { field: &'static str },

    /// `from_value` was given a string outside the enum's allowed set.
    #[error("{value:?} is not a valid {enum_name}; allowed values: {}", .allowed.join(", "))]
    InvalidEnumValue {
        enum_name: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    /// Strict mode refused to fall back to the unparsed representation.
    #[error("{schema} could not be decoded into typed fields: {reason}")]
    Unparsed {
        schema: &'static str,
        reason: String,
    },

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Name of the missing field when this is a [`Error::MissingField`].
    pub fn missing_field(&self) -> Option<&'static str> {
        match self {
            Error::MissingField { field } => Some(field),
            _ => None,
        }
    }
}
