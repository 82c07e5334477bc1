//! Signature-to-notes mapping.
//!
//! Two modes are available:
//!
//! - **Equal-tempered** (default): every signature character becomes one
//!   note, `base * 2^(v/12)` where `v` is the character's hex value.
//! - **Palette**: the signature is read two characters at a time and each
//!   group picks one of four note names from a palette selected by the
//!   transaction type.

use serde::{Deserialize, Serialize};
use symph_spec::{Note, NoteSequence, Transaction, TransactionType};

use crate::error::{MusicError, MusicResult};
use crate::note::{
    equal_tempered, hex_digit_value, hex_prefix_value, note_name_to_frequency, palette_for,
    DEFAULT_BASE_FREQUENCY,
};

/// How signature characters become notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingMode {
    /// One note per character, equal-tempered above the base frequency.
    #[default]
    EqualTempered,
    /// One palette note per two-character group.
    Palette,
}

/// Maps signatures to note sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteMapper {
    mode: MappingMode,
    base_frequency: f64,
}

impl Default for NoteMapper {
    fn default() -> Self {
        Self {
            mode: MappingMode::EqualTempered,
            base_frequency: DEFAULT_BASE_FREQUENCY,
        }
    }
}

impl NoteMapper {
    /// Creates an equal-tempered mapper at the default base frequency.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a palette mapper.
    pub fn palette() -> Self {
        Self {
            mode: MappingMode::Palette,
            ..Self::default()
        }
    }

    /// Sets the mapping mode.
    pub fn with_mode(mut self, mode: MappingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the base frequency of the equal-tempered mode.
    ///
    /// # Errors
    /// Returns an error if the frequency is not finite and positive.
    pub fn with_base_frequency(mut self, base_frequency: f64) -> MusicResult<Self> {
        if !base_frequency.is_finite() || base_frequency <= 0.0 {
            return Err(MusicError::invalid_param(
                "base_frequency",
                format!("must be a positive number, got {}", base_frequency),
            ));
        }
        self.base_frequency = base_frequency;
        Ok(self)
    }

    /// Returns the mapping mode.
    pub fn mode(&self) -> MappingMode {
        self.mode
    }

    /// Returns the equal-tempered base frequency.
    pub fn base_frequency(&self) -> f64 {
        self.base_frequency
    }

    /// Maps a signature with no type information.
    ///
    /// In palette mode the transfer palette is used.
    ///
    /// # Example
    /// ```
    /// use symph_backend_music::NoteMapper;
    ///
    /// let notes = NoteMapper::new().map("ab12").unwrap();
    /// assert_eq!(notes.len(), 4);
    /// assert!((notes.notes[0].frequency - 391.995).abs() < 0.01);
    /// ```
    pub fn map(&self, signature: &str) -> MusicResult<NoteSequence> {
        self.map_with_type(signature, TransactionType::Unknown)
    }

    /// Maps a transaction's signature, choosing the palette by its type.
    pub fn map_transaction(&self, tx: &Transaction) -> MusicResult<NoteSequence> {
        self.map_with_type(&tx.signature, tx.tx_type)
    }

    /// Maps a signature using the palette of the given type.
    pub fn map_with_type(
        &self,
        signature: &str,
        tx_type: TransactionType,
    ) -> MusicResult<NoteSequence> {
        if signature.is_empty() {
            return Err(MusicError::EmptySignature);
        }
        match self.mode {
            MappingMode::EqualTempered => Ok(self.map_equal_tempered(signature)),
            MappingMode::Palette => map_palette(signature, tx_type),
        }
    }

    fn map_equal_tempered(&self, signature: &str) -> NoteSequence {
        let notes = signature
            .chars()
            .map(|c| {
                let semitones = hex_digit_value(c) as f64;
                Note::from_frequency(equal_tempered(self.base_frequency, semitones))
            })
            .collect();
        NoteSequence::new(notes)
    }
}

fn map_palette(signature: &str, tx_type: TransactionType) -> MusicResult<NoteSequence> {
    let palette = palette_for(tx_type);
    let chars: Vec<char> = signature.chars().collect();

    let notes = chars
        .chunks(2)
        .map(|group| {
            let group: String = group.iter().collect();
            let index = (hex_prefix_value(&group) % palette.len() as u64) as usize;
            let name = palette[index];
            let frequency = note_name_to_frequency(name)
                .ok_or_else(|| MusicError::InvalidNoteName(name.to_string()))?;
            Ok(Note::named(name, frequency))
        })
        .collect::<MusicResult<Vec<Note>>>()?;

    Ok(NoteSequence::new(notes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hex_mapping_known_values() {
        let freqs = NoteMapper::new().map("ab12").unwrap().frequencies();
        let expected = [391.995, 415.305, 233.082, 246.942];
        assert_eq!(freqs.len(), expected.len());
        for (got, want) in freqs.iter().zip(expected) {
            assert!((got - want).abs() < 0.01, "{} vs {}", got, want);
        }
    }

    #[test]
    fn test_non_hex_maps_to_base() {
        let freqs = NoteMapper::new().map("zZ0").unwrap().frequencies();
        for f in freqs {
            assert!((f - 220.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_signature_rejected() {
        assert!(matches!(
            NoteMapper::new().map(""),
            Err(MusicError::EmptySignature)
        ));
        assert!(matches!(
            NoteMapper::palette().map(""),
            Err(MusicError::EmptySignature)
        ));
    }

    #[test]
    fn test_palette_groups() {
        // "0a" = 10 % 4 = 2, "ff" = 255 % 4 = 3, "z1" = 0, "7" = 7 % 4 = 3
        let seq = NoteMapper::palette()
            .map_with_type("0affz17", TransactionType::Swap)
            .unwrap();
        assert_eq!(seq.names(), vec!["A4", "D5", "D4", "D5"]);
        assert!((seq.notes[0].frequency - 440.0).abs() < 1e-9);
    }

    #[test]
    fn test_palette_by_transaction_type() {
        let tx = Transaction::builder("0000", TransactionType::Burn).build();
        let seq = NoteMapper::palette().map_transaction(&tx).unwrap();
        assert_eq!(seq.names(), vec!["G4", "G4"]);

        let seq = NoteMapper::palette().map("0000").unwrap();
        assert_eq!(seq.names(), vec!["C4", "C4"]);
    }

    #[test]
    fn test_custom_base_frequency() {
        let mapper = NoteMapper::new().with_base_frequency(440.0).unwrap();
        let freqs = mapper.map("c").unwrap().frequencies();
        assert!((freqs[0] - 880.0).abs() < 1e-9);

        assert!(NoteMapper::new().with_base_frequency(0.0).is_err());
        assert!(NoteMapper::new().with_base_frequency(f64::NAN).is_err());
    }
}
