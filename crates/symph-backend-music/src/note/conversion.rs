//! Note name parsing.

use super::constants::SEMITONE_MAP;
use super::frequency::midi_to_freq;

/// Parses a note name into (semitone, octave).
///
/// Accepts a letter, an optional `#` or `b`, and an octave number:
/// `"C4"`, `"F#3"`, `"Bb5"`.
fn parse_note_name(name: &str) -> Option<(i32, i32)> {
    let mut chars = name.trim().chars().peekable();

    let letter = chars.next()?.to_ascii_uppercase();
    let mut semitone = SEMITONE_MAP
        .iter()
        .find(|(c, _)| *c == letter)
        .map(|(_, s)| *s)?;

    match chars.peek() {
        Some('#') => {
            chars.next();
            semitone += 1;
        }
        Some('b') => {
            chars.next();
            semitone -= 1;
        }
        _ => {}
    }

    let octave: i32 = chars.collect::<String>().parse().ok()?;
    Some((semitone, octave))
}

/// Converts a note name to a MIDI note number (C4 = 60).
///
/// # Returns
/// `None` if the name does not parse or falls outside 0-127.
///
/// # Examples
/// ```
/// use symph_backend_music::note::note_name_to_midi;
///
/// assert_eq!(note_name_to_midi("C4"), Some(60));
/// assert_eq!(note_name_to_midi("A4"), Some(69));
/// assert_eq!(note_name_to_midi("Bb3"), Some(58));
/// assert_eq!(note_name_to_midi("H2"), None);
/// ```
pub fn note_name_to_midi(name: &str) -> Option<u8> {
    let (semitone, octave) = parse_note_name(name)?;
    let midi = (octave + 1) * 12 + semitone;
    u8::try_from(midi).ok().filter(|m| *m <= 127)
}

/// Converts a note name straight to its equal-tempered frequency.
pub fn note_name_to_frequency(name: &str) -> Option<f64> {
    note_name_to_midi(name).map(midi_to_freq)
}
