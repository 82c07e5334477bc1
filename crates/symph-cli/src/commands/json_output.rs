//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json`. The envelope is always a
//! [`CommandOutput`]: `success`, a list of [`JsonError`]s, and the
//! command-specific `result` on success.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::process::ExitCode;

use symph_spec::{
    DnaSequence, DreamFragment, NoteSequence, QuantumState, Transaction, TransactionType,
};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Backend errors pass through with their own codes (`SPEC_xxx`,
/// `MUSIC_xxx`, `AUDIO_xxx`).
pub mod error_codes {
    /// Signature missing or malformed
    pub const INVALID_SIGNATURE: &str = "CLI_001";
    /// Address malformed
    pub const INVALID_ADDRESS: &str = "CLI_002";
    /// Argument value out of range
    pub const INVALID_ARGUMENT: &str = "CLI_003";
    /// No transaction source configured
    pub const NO_SOURCE: &str = "CLI_004";
    /// Transaction not found in the source
    pub const NOT_FOUND: &str = "CLI_005";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "CLI_006";
    /// Unknown visualizer name
    pub const UNKNOWN_VISUALIZER: &str = "CLI_007";
    /// Share link without a tx parameter
    pub const MISSING_SHARE_PARAM: &str = "CLI_008";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "MUSIC_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Suggestion for fixing the error (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Creates an error from any backend error, keeping its code.
    pub fn from_backend<E: symph_spec::BackendError>(err: &E) -> Self {
        Self::new(err.code(), err.message())
    }

    /// Sets a suggestion for fixing the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.message, self.code)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  hint: {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for JsonError {}

/// Envelope printed by every command in `--json` mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOutput<T> {
    pub success: bool,
    pub errors: Vec<JsonError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> CommandOutput<T> {
    /// Creates a successful output.
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Prints the envelope for `outcome` and maps it to an exit code.
pub fn emit<T: Serialize>(outcome: std::result::Result<T, JsonError>) -> Result<ExitCode> {
    let (output, code) = match outcome {
        Ok(result) => (CommandOutput::success(result), ExitCode::SUCCESS),
        Err(error) => (CommandOutput::failure(vec![error]), ExitCode::from(1)),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(code)
}

/// Result of the `notes` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotesResult {
    pub signature: String,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    /// "equal_tempered" or "palette"
    pub mode: String,
    pub notes: NoteSequence,
    pub duration_seconds: f64,
}

/// Result of the `dna` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnaResult {
    pub signature: String,
    pub dna: DnaSequence,
    /// Expressed motif frequencies in Hz.
    pub motif: Vec<f64>,
}

/// Result of the `quantum` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantumResult {
    pub signature: String,
    pub state: QuantumState,
    pub duration_seconds: f64,
}

/// Result of the `dream` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DreamResult {
    pub signature: String,
    pub seeded: bool,
    pub dream: DreamFragment,
}

/// Result of the `render` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    pub signature: String,
    pub voice: String,
    pub output: String,
    pub sample_rate: u32,
    pub num_samples: usize,
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM data.
    pub pcm_hash: String,
}

/// Result of the `list` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResult {
    pub address: String,
    pub limit: usize,
    pub transactions: Vec<Transaction>,
}

/// Result of the `share` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareResult {
    pub signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_intent: Option<String>,
}

/// Result of the `visualize` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizeResult {
    pub signature: String,
    pub visualizer: String,
    pub time_seconds: f64,
    pub frame: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_envelope_shape() {
        let output: CommandOutput<ShareResult> = CommandOutput::failure(vec![JsonError::new(
            error_codes::NOT_FOUND,
            "transaction not found: ab12",
        )
        .with_suggestion("check SYMPH_TRANSACTIONS")]);

        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["errors"][0]["code"], "CLI_005");
        assert_eq!(value["errors"][0]["suggestion"], "check SYMPH_TRANSACTIONS");
        assert!(value.get("result").is_none());
    }

    #[test]
    fn test_backend_error_keeps_code() {
        let err = JsonError::from_backend(&symph_spec::SpecError::EmptySignature);
        assert_eq!(err.code, "SPEC_001");
        assert!(err.suggestion.is_none());
    }

    #[test]
    fn test_success_envelope_skips_empty_fields() {
        let output = CommandOutput::success(ShareResult {
            signature: "ab12".into(),
            link: Some("http://localhost:3000?tx=ab12".into()),
            x_intent: None,
        });
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["result"]["link"], "http://localhost:3000?tx=ab12");
        assert!(value["result"].get("x_intent").is_none());
    }
}
