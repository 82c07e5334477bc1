//! Quantum-harmonics generation.
//!
//! Produces three parallel voices from a transaction:
//!
//! ```text
//! amplitude    = clamp(value / 1000, 0, 1)
//! phase        = hex_prefix(signature[0..8]) / 0xFFFFFFFF
//! entanglement = BLAKE3(signature || 0x00 || "entanglement") / u32::MAX
//! melody[i]    = TABLE[hex(c_i) % 7]
//! harmony      = TABLE * (1 + value / 10000)
//! rhythm       = [1, 0.5, 0.25, 0.125] * (1 + phase)
//! ```

use symph_spec::hash::derive_unit_interval;
use symph_spec::model::clamp_unit;
use symph_spec::{QuantumState, Superposition, Transaction};

use crate::error::{MusicError, MusicResult};
use crate::note::{hex_digit_value, hex_prefix_value};

/// C-major scale from C4 to B4, in Hz.
pub const BASE_FREQUENCIES: [f64; 7] = [261.63, 293.66, 329.63, 349.23, 392.00, 440.00, 493.88];

/// Beat durations before phase scaling.
pub const BASE_RHYTHM: [f64; 4] = [1.0, 0.5, 0.25, 0.125];

/// Seed key for the entanglement stream.
pub const ENTANGLEMENT_KEY: &str = "entanglement";

/// Number of leading signature characters read for the phase.
const PHASE_CHARS: usize = 8;

/// Generates [`QuantumState`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuantumHarmonics;

impl QuantumHarmonics {
    /// Creates a generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates the quantum state for a transaction.
    ///
    /// # Errors
    /// Returns [`MusicError::EmptySignature`] if the signature is empty.
    pub fn generate(&self, tx: &Transaction) -> MusicResult<QuantumState> {
        let signature = tx.signature.as_str();
        if signature.is_empty() {
            return Err(MusicError::EmptySignature);
        }

        let value = tx.value_or_zero();
        let value = if value.is_finite() { value } else { 0.0 };
        let phase = phase_of(signature);

        Ok(QuantumState {
            amplitude: clamp_unit(value / 1000.0),
            phase,
            entanglement: derive_unit_interval(signature, ENTANGLEMENT_KEY),
            superposition: Superposition {
                melody: melody_of(signature),
                harmony: BASE_FREQUENCIES
                    .iter()
                    .map(|f| f * (1.0 + value / 10_000.0))
                    .collect(),
                rhythm: BASE_RHYTHM.iter().map(|r| r * (1.0 + phase)).collect(),
            },
        })
    }
}

/// Phase in [0, 1] from the hex reading of the first eight characters.
///
/// # Example
/// ```
/// use symph_backend_music::quantum::phase_of;
///
/// assert!((phase_of("0000ffffdeadbeef") - 1.5259e-5).abs() < 1e-8);
/// assert_eq!(phase_of("zzzzzzzz"), 0.0);
/// ```
pub fn phase_of(signature: &str) -> f64 {
    let head: String = signature.chars().take(PHASE_CHARS).collect();
    hex_prefix_value(&head) as f64 / u32::MAX as f64
}

/// One scale frequency per signature character.
pub fn melody_of(signature: &str) -> Vec<f64> {
    signature
        .chars()
        .map(|c| BASE_FREQUENCIES[hex_digit_value(c) as usize % BASE_FREQUENCIES.len()])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use symph_spec::TransactionType;

    fn tx(signature: &str, value: f64) -> Transaction {
        Transaction::builder(signature, TransactionType::Swap)
            .value(value)
            .build()
    }

    #[test]
    fn test_phase_of_leading_zeros() {
        let state = QuantumHarmonics::new().generate(&tx("0000ffff1234", 0.0)).unwrap();
        assert!((state.phase - 0.0000153).abs() < 1e-7);
    }

    #[test]
    fn test_phase_max() {
        assert_eq!(phase_of("ffffffff"), 1.0);
        assert_eq!(phase_of("ffffffffff"), 1.0);
    }

    #[test]
    fn test_phase_reads_prefix_only() {
        // "12" then a non-hex character: only 0x12 counts.
        assert_eq!(phase_of("12zz0000"), 0x12 as f64 / u32::MAX as f64);
    }

    #[test]
    fn test_melody_indices() {
        // '9' -> 9 % 7 = 2, 'f' -> 15 % 7 = 1, 'z' -> 0
        assert_eq!(melody_of("9fz"), vec![329.63, 293.66, 261.63]);
    }

    #[test]
    fn test_amplitude_and_harmony() {
        let state = QuantumHarmonics::new().generate(&tx("ab", 5000.0)).unwrap();
        assert_eq!(state.amplitude, 1.0);
        assert_eq!(state.superposition.harmony.len(), 7);
        assert!((state.superposition.harmony[5] - 660.0).abs() < 1e-9);

        let state = QuantumHarmonics::new().generate(&tx("ab", 250.0)).unwrap();
        assert_eq!(state.amplitude, 0.25);
    }

    #[test]
    fn test_rhythm_scaled_by_phase() {
        let state = QuantumHarmonics::new().generate(&tx("ffffffff", 0.0)).unwrap();
        assert_eq!(state.superposition.rhythm, vec![2.0, 1.0, 0.5, 0.25]);
    }

    #[test]
    fn test_entanglement_is_deterministic() {
        let gen = QuantumHarmonics::new();
        let a = gen.generate(&tx("5Kt3hQx9", 0.0)).unwrap();
        let b = gen.generate(&tx("5Kt3hQx9", 0.0)).unwrap();
        assert_eq!(a, b);
        assert!((0.0..=1.0).contains(&a.entanglement));
    }

    #[test]
    fn test_empty_signature() {
        assert!(matches!(
            QuantumHarmonics::new().generate(&tx("", 1.0)),
            Err(MusicError::EmptySignature)
        ));
    }
}
