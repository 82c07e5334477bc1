//! Pitch to frequency.

use super::constants::A4_FREQUENCY;

/// Frequency of a MIDI note number, with A4 (69) at [`A4_FREQUENCY`].
///
/// # Examples
/// ```
/// use symph_backend_music::note::midi_to_freq;
///
/// assert!((midi_to_freq(69) - 440.0).abs() < 0.001);
/// assert!((midi_to_freq(60) - 261.626).abs() < 0.01);
/// ```
pub fn midi_to_freq(midi_note: u8) -> f64 {
    equal_tempered(A4_FREQUENCY, midi_note as f64 - 69.0)
}

/// Frequency `semitones` equal-tempered steps above `base`.
pub fn equal_tempered(base: f64, semitones: f64) -> f64 {
    base * 2.0_f64.powf(semitones / 12.0)
}
