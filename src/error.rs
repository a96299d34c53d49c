//! Error types for domschema
//!
//! This module defines all error types used throughout the library.
//! Schema construction and structural validation both report failures as
//! values (`ConstructionError`, `ValidationFailure`); the crate-level
//! [`Error`] wraps them for callers that also deal with markup parsing
//! and I/O.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Result type alias using domschema Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for domschema operations
#[derive(Error, Debug)]
pub enum Error {
    /// Schema construction error
    #[error("construction error: {0}")]
    Construction(#[from] ConstructionError),

    /// Structural validation failure
    #[error("validation failure: {0}")]
    Validation(#[from] ValidationFailure),

    /// Markup parsing error
    #[error("markup error: {0}")]
    Markup(String),

    /// Limit exceeded error
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error produced while building a schema tree
///
/// Construction failures are returned as values, never thrown past the
/// build protocol, so a schema literal yields either a ready-to-use root
/// or a describable failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstructionError {
    /// Error message
    pub message: String,
}

impl ConstructionError {
    /// Create a new construction error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ConstructionError {}

/// Structural validation failure with context
///
/// Carries the label of the schema node that raised the failure and a
/// compact rendering of the offending candidate node or node sequence.
/// `Display` produces the fully qualified message, e.g.
/// `<Element name="p"> at [p,p]: Expected a single HTML element but found 2.`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    /// Label of the schema node that raised the failure
    pub schema: String,
    /// Rendering of the offending node or node sequence
    pub instance: String,
    /// The specific failure message
    pub message: String,
}

impl ValidationFailure {
    /// Create a new validation failure
    pub fn new(
        schema: impl Into<String>,
        instance: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            schema: schema.into(),
            instance: instance.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.schema, self.instance, self.message)
    }
}

impl std::error::Error for ValidationFailure {}
