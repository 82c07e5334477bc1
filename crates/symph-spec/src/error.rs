//! Error types for transaction validation and processing.

use thiserror::Error;

/// Result type for spec-level operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors raised while validating input or reading transaction data.
#[derive(Debug, Error)]
pub enum SpecError {
    /// A signature was required but the string is empty.
    #[error("signature must not be empty")]
    EmptySignature,

    /// The signature contains characters outside the hex and base58 alphabets.
    #[error("invalid signature '{signature}': {reason}")]
    InvalidSignature {
        /// The rejected signature.
        signature: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The string is not a well-formed account address.
    #[error("invalid address '{address}': {reason}")]
    InvalidAddress {
        /// The rejected address.
        address: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A share link did not carry a `tx` query parameter.
    #[error("share link has no tx parameter: {url}")]
    MissingShareParam {
        /// The link that was parsed.
        url: String,
    },

    /// I/O error while reading a transaction source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error while decoding a transaction source.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SpecError {
    /// Creates an invalid signature error.
    pub fn invalid_signature(signature: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSignature {
            signature: signature.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid address error.
    pub fn invalid_address(address: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAddress {
            address: address.into(),
            reason: reason.into(),
        }
    }
}

/// Common trait for errors surfaced by the Symph crates.
///
/// Provides a stable code and category so front ends can report errors
/// uniformly regardless of which crate raised them.
///
/// # Example
///
/// ```
/// use symph_spec::error::{BackendError, SpecError};
///
/// fn handle_error<E: BackendError>(err: E) -> String {
///     format!("[{}] {}", err.code(), err.message())
/// }
///
/// assert!(handle_error(SpecError::EmptySignature).starts_with("[SPEC_001]"));
/// ```
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "SPEC_001", "MUSIC_002", etc.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}

impl BackendError for SpecError {
    fn code(&self) -> &'static str {
        match self {
            SpecError::EmptySignature => "SPEC_001",
            SpecError::InvalidSignature { .. } => "SPEC_002",
            SpecError::InvalidAddress { .. } => "SPEC_003",
            SpecError::MissingShareParam { .. } => "SPEC_004",
            SpecError::Io(_) => "SPEC_005",
            SpecError::Json(_) => "SPEC_006",
        }
    }

    fn category(&self) -> &'static str {
        "spec"
    }
}
