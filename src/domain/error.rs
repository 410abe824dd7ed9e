//! Error types for the Nomorra plugin.
//!
//! This module defines the centralized error type [`NomorraError`] and a type alias
//! [`Result`] used throughout the crate. All variants are implemented with `thiserror`.

use thiserror::Error;

/// The main error type for Nomorra operations.
///
/// Most failures happen while loading the story catalog or a theme. Once the
/// catalog has been accepted, searching and selecting never fail.
///
/// # Examples
///
/// ```
/// use nomorra::NomorraError;
///
/// let err = NomorraError::DuplicateId("zion".to_string());
/// assert_eq!(err.to_string(), "Duplicate destination id: zion");
/// ```
#[derive(Debug, Error)]
pub enum NomorraError {
    /// The catalog as a whole could not be accepted.
    ///
    /// The string describes what went wrong (for example an unreadable file).
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A single destination record is malformed.
    #[error("Invalid destination '{id}': {reason}")]
    InvalidDestination {
        /// Identifier of the offending record (may be empty).
        id: String,
        /// Which rule the record violates.
        reason: String,
    },

    /// Two records share the same identifier.
    #[error("Duplicate destination id: {0}")]
    DuplicateId(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog JSON could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl NomorraError {
    /// Shorthand for building an [`NomorraError::InvalidDestination`].
    pub(crate) fn invalid(id: &str, reason: impl Into<String>) -> Self {
        Self::InvalidDestination {
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}

/// A specialized `Result` type for Nomorra operations.
pub type Result<T> = std::result::Result<T, NomorraError>;
