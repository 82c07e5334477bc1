//! Decorative dream fragments.
//!
//! Nothing audible depends on these values; they only drive ornamentation.

use serde::{Deserialize, Serialize};

/// Mood attached to a transaction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DreamEmotion {
    Joy,
    Wonder,
    Mystery,
    Serenity,
}

/// Geometry the weave is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DreamPattern {
    Spiral,
    Web,
    Vortex,
    Mandala,
}

impl DreamPattern {
    /// All patterns, in sampling order.
    pub const ALL: [DreamPattern; 4] = [
        DreamPattern::Spiral,
        DreamPattern::Web,
        DreamPattern::Vortex,
        DreamPattern::Mandala,
    ];
}

/// Color, intensity and memories distilled from the transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Essence {
    /// Hue in [0, 360).
    pub hue: f64,
    /// CSS color string built from `hue`.
    pub color: String,
    /// In [0, 1].
    pub intensity: f64,
    /// One short token per signature character.
    pub memory: Vec<String>,
    pub emotion: DreamEmotion,
}

/// A glowing point on the canvas (coordinates in percent).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bead {
    pub x: f64,
    pub y: f64,
    pub glow: f64,
}

/// A drifting stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Feather {
    /// Radians in [0, 2π).
    pub angle: f64,
    pub flow: f64,
    /// Hue in [0, 360).
    pub hue: f64,
}

/// Geometric layout of the fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weave {
    pub pattern: DreamPattern,
    pub threads: Vec<f64>,
    pub beads: Vec<Bead>,
    pub feathers: Vec<Feather>,
}

/// A labelled tone used for ambient flourishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Whisper {
    /// Hz in [0, 432).
    pub frequency: f64,
    pub message: String,
}

/// Energy and labels for the fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spirit {
    pub energy: f64,
    pub resonance: Vec<String>,
    pub whispers: Vec<Whisper>,
}

/// Decorative attributes for one transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DreamFragment {
    pub essence: Essence,
    pub weave: Weave,
    pub spirit: Spirit,
}
