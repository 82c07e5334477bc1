//! Signature hashing and seed derivation.
//!
//! This module implements the determinism policy for Symph: any value that
//! the reference application drew from `Math.random()` and that must be
//! reproducible is instead derived from the transaction signature.
//!
//! ```text
//! signature_seed       = truncate_u32(BLAKE3(signature))
//! component_seed(key)  = truncate_u32(BLAKE3(signature || 0x00 || key))
//! unit_interval(key)   = component_seed(key) / u32::MAX
//! ```

/// Computes the BLAKE3 hash of a signature as 64 lowercase hex characters.
///
/// # Example
/// ```
/// use symph_spec::hash::signature_hash;
///
/// assert_eq!(signature_hash("ab12").len(), 64);
/// ```
pub fn signature_hash(signature: &str) -> String {
    blake3::hash(signature.as_bytes()).to_hex().to_string()
}

/// Derives the base 32-bit seed for a signature.
///
/// # Arguments
/// * `signature` - Transaction signature (any string, including empty)
///
/// # Returns
/// * The first 4 bytes of the BLAKE3 digest, little-endian
pub fn signature_seed(signature: &str) -> u32 {
    truncate_u32(blake3::hash(signature.as_bytes()))
}

/// Derives a seed for a named component of a signature.
///
/// Independent components (entanglement, dream layout, ...) use distinct keys
/// so that their streams do not correlate.
///
/// # Example
/// ```
/// use symph_spec::hash::derive_component_seed;
///
/// let a = derive_component_seed("ab12", "entanglement");
/// let b = derive_component_seed("ab12", "dream");
/// assert_ne!(a, b);
/// ```
pub fn derive_component_seed(signature: &str, key: &str) -> u32 {
    // The separator keeps ("ab", "c") and ("a", "bc") apart.
    let mut hasher = blake3::Hasher::new();
    hasher.update(signature.as_bytes());
    hasher.update(&[0u8]);
    hasher.update(key.as_bytes());
    truncate_u32(hasher.finalize())
}

/// Derives a value in [0, 1] for a named component of a signature.
pub fn derive_unit_interval(signature: &str, key: &str) -> f64 {
    derive_component_seed(signature, key) as f64 / u32::MAX as f64
}

fn truncate_u32(hash: blake3::Hash) -> u32 {
    let bytes = hash.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_consistency() {
        assert_eq!(signature_seed("5Kt3hQx9"), signature_seed("5Kt3hQx9"));
        assert_ne!(signature_seed("5Kt3hQx9"), signature_seed("5Kt3hQx8"));
    }

    #[test]
    fn test_component_separator() {
        assert_ne!(
            derive_component_seed("ab", "c"),
            derive_component_seed("a", "bc")
        );
    }

    #[test]
    fn test_unit_interval_range() {
        for sig in ["", "a", "ab12", "5Kt3hQx9zzzz", "0000ffff"] {
            let v = derive_unit_interval(sig, "entanglement");
            assert!((0.0..=1.0).contains(&v), "{} out of range for {:?}", v, sig);
        }
    }

    #[test]
    fn test_hash_is_lowercase_hex() {
        let h = signature_hash("ab12");
        assert!(h.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
