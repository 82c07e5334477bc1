//! Signature and address validation.
//!
//! Signatures are opaque: any non-empty string drawn from the hexadecimal or
//! base58 alphabets is accepted. Addresses follow the account-identifier rules
//! of the target chain: base58 text that decodes to exactly 32 bytes.

mod address;

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{SpecError, SpecResult};

pub use address::{decode_base58, is_valid_address, validate_address, ADDRESS_LEN};

/// Hex digits or the base58 alphabet (which excludes `0`, `O`, `I`, `l`).
const SIGNATURE_PATTERN: &str = r"^(?:[0-9a-fA-F]+|[1-9A-HJ-NP-Za-km-z]+)$";

/// Longest signature accepted (a 64-byte signature is at most 88 base58 chars).
pub const MAX_SIGNATURE_LEN: usize = 128;

static SIGNATURE_REGEX: OnceLock<Regex> = OnceLock::new();

fn signature_regex() -> &'static Regex {
    SIGNATURE_REGEX.get_or_init(|| Regex::new(SIGNATURE_PATTERN).expect("invalid regex pattern"))
}

/// Validates a transaction signature.
///
/// # Returns
/// * `Ok(())` if the signature is usable as generator input
/// * `Err(SpecError)` describing the first problem found
///
/// # Example
/// ```
/// use symph_spec::validation::validate_signature;
///
/// assert!(validate_signature("ab12").is_ok());
/// assert!(validate_signature("").is_err());
/// assert!(validate_signature("has space").is_err());
/// ```
pub fn validate_signature(signature: &str) -> SpecResult<()> {
    if signature.is_empty() {
        return Err(SpecError::EmptySignature);
    }
    if signature.len() > MAX_SIGNATURE_LEN {
        return Err(SpecError::invalid_signature(
            signature,
            format!("longer than {} characters", MAX_SIGNATURE_LEN),
        ));
    }
    if !signature_regex().is_match(signature) {
        return Err(SpecError::invalid_signature(
            signature,
            "expected hexadecimal or base58 characters",
        ));
    }
    Ok(())
}

/// Returns true if the signature passes [`validate_signature`].
pub fn is_valid_signature(signature: &str) -> bool {
    validate_signature(signature).is_ok()
}
