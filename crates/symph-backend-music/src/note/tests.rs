//! Tests for note conversion and hex readings.

use super::*;
use symph_spec::TransactionType;

#[test]
fn test_midi_to_freq() {
    assert!((midi_to_freq(69) - 440.0).abs() < 0.001);
    assert!((midi_to_freq(60) - 261.626).abs() < 0.01);
    assert!((midi_to_freq(57) - 220.0).abs() < 0.001);
}

#[test]
fn test_equal_tempered_octave() {
    assert!((equal_tempered(220.0, 12.0) - 440.0).abs() < 1e-9);
    assert!((equal_tempered(220.0, 0.0) - 220.0).abs() < 1e-12);
}

#[test]
fn test_note_names() {
    assert_eq!(note_name_to_midi("C4"), Some(60));
    assert_eq!(note_name_to_midi("c4"), Some(60));
    assert_eq!(note_name_to_midi("F#4"), Some(66));
    assert_eq!(note_name_to_midi("G5"), Some(79));
    assert_eq!(note_name_to_midi(""), None);
    assert_eq!(note_name_to_midi("C"), None);
    assert_eq!(note_name_to_midi("C99"), None);
}

#[test]
fn test_every_palette_note_parses() {
    for ty in TransactionType::all() {
        for name in palette_for(*ty) {
            assert!(
                note_name_to_frequency(name).is_some(),
                "palette note {} for {} does not parse",
                name,
                ty
            );
        }
    }
}

#[test]
fn test_unknown_uses_transfer_palette() {
    assert_eq!(
        palette_for(TransactionType::Unknown),
        palette_for(TransactionType::Transfer)
    );
}

#[test]
fn test_hex_prefix_saturates() {
    assert_eq!(hex_prefix_value(&"f".repeat(20)), u64::MAX);
    assert_eq!(hex_prefix_value(""), 0);
}
