//! Error types for the music backend.

use symph_spec::BackendError;
use thiserror::Error;

/// Result type for music generation.
pub type MusicResult<T> = Result<T, MusicError>;

/// Errors raised by the generators.
#[derive(Debug, Error)]
pub enum MusicError {
    /// The signature was empty.
    #[error("signature is empty")]
    EmptySignature,

    /// A palette note name could not be parsed.
    #[error("invalid note name: {0}")]
    InvalidNoteName(String),

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },
}

impl MusicError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl BackendError for MusicError {
    fn code(&self) -> &'static str {
        match self {
            MusicError::EmptySignature => "MUSIC_001",
            MusicError::InvalidNoteName(_) => "MUSIC_002",
            MusicError::InvalidParameter { .. } => "MUSIC_003",
        }
    }

    fn category(&self) -> &'static str {
        "music"
    }
}
