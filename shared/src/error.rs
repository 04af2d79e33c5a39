//! Error types shared by the record models and validation

use thiserror::Error;

/// A field-level validation failure
///
/// `message` is the user-facing text shown in the form notification,
/// `field` is the wire name of the offending field (e.g. `"email"`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Raised when a field name does not belong to the record's draft
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);
