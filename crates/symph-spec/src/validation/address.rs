//! Account address validation (base58, 32-byte public keys).

use crate::error::{SpecError, SpecResult};

/// Decoded length of an account address in bytes.
pub const ADDRESS_LEN: usize = 32;

const BASE58_ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Sentinel for bytes outside the alphabet.
const INVALID: u8 = 0xFF;

const fn decode_table() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < BASE58_ALPHABET.len() {
        table[BASE58_ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

static DECODE_TABLE: [u8; 128] = decode_table();

/// Decodes a base58 string (Bitcoin alphabet) into bytes.
///
/// Leading `'1'` characters decode to leading zero bytes.
///
/// # Returns
/// * `Some(bytes)` on success
/// * `None` if any character is outside the alphabet
pub fn decode_base58(input: &str) -> Option<Vec<u8>> {
    // Little-endian big number, one byte per limb.
    let mut bytes: Vec<u8> = Vec::with_capacity(input.len());
    for c in input.bytes() {
        let digit = *DECODE_TABLE.get(c as usize)?;
        if digit == INVALID {
            return None;
        }
        let mut carry = digit as u32;
        for byte in bytes.iter_mut() {
            carry += (*byte as u32) * 58;
            *byte = (carry & 0xFF) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xFF) as u8);
            carry >>= 8;
        }
    }

    let leading_zeros = input.bytes().take_while(|&c| c == b'1').count();
    let mut out = vec![0u8; leading_zeros];
    out.extend(bytes.iter().rev());
    Some(out)
}

/// Validates an account address.
///
/// # Example
/// ```
/// use symph_spec::validation::validate_address;
///
/// assert!(validate_address("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA").is_ok());
/// assert!(validate_address("not-an-address").is_err());
/// ```
pub fn validate_address(address: &str) -> SpecResult<()> {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return Err(SpecError::invalid_address(address, "address is empty"));
    }
    // 32 bytes never need more than 44 base58 characters.
    if trimmed.len() > 44 {
        return Err(SpecError::invalid_address(
            address,
            format!("expected at most 44 characters, got {}", trimmed.len()),
        ));
    }
    let decoded = decode_base58(trimmed).ok_or_else(|| {
        SpecError::invalid_address(address, "contains characters outside base58")
    })?;
    if decoded.len() != ADDRESS_LEN {
        return Err(SpecError::invalid_address(
            address,
            format!("decodes to {} bytes, expected {}", decoded.len(), ADDRESS_LEN),
        ));
    }
    Ok(())
}

/// Returns true if the string is a well-formed account address.
pub fn is_valid_address(address: &str) -> bool {
    validate_address(address).is_ok()
}
