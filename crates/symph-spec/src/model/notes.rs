//! Note sequences produced by the signature-to-notes mapper.

use serde::{Deserialize, Serialize};

/// A single note: a frequency, optionally with its symbolic name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Frequency in Hz (always positive).
    pub frequency: f64,
    /// Symbolic name such as `"C4"` when the note came from a palette.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Note {
    /// Creates an unnamed note.
    pub fn from_frequency(frequency: f64) -> Self {
        Self {
            frequency,
            name: None,
        }
    }

    /// Creates a named note.
    pub fn named(name: impl Into<String>, frequency: f64) -> Self {
        Self {
            frequency,
            name: Some(name.into()),
        }
    }
}

/// Ordered notes derived from one signature.
///
/// Length equals the number of characters (or character pairs) consumed from
/// the signature.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NoteSequence {
    /// Notes in playback order.
    pub notes: Vec<Note>,
}

impl NoteSequence {
    /// Creates a sequence from notes.
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// Number of notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns true if there are no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Frequencies in playback order.
    pub fn frequencies(&self) -> Vec<f64> {
        self.notes.iter().map(|n| n.frequency).collect()
    }

    /// Names in playback order, for sequences built from a palette.
    pub fn names(&self) -> Vec<&str> {
        self.notes.iter().filter_map(|n| n.name.as_deref()).collect()
    }

    /// Nominal playback length at a fixed per-note step.
    pub fn duration(&self, step_seconds: f64) -> f64 {
        self.notes.len() as f64 * step_seconds
    }
}
