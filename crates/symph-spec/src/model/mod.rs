//! Generator output types.
//!
//! Each type is a short-lived value object created per transaction selection
//! and handed by value or reference to the audio scheduler and visualizers.
//!
//! - [`notes`]: Signature-to-notes output
//! - [`dna`]: Transaction DNA (base motif, mutations, scalar metrics)
//! - [`quantum`]: Quantum-harmonics state (three parallel voices)
//! - [`dream`]: Decorative dream fragments

pub mod dna;
pub mod dream;
pub mod notes;
pub mod quantum;

pub use dna::{DnaSequence, Mutation, MutationKind};
pub use dream::{
    Bead, DreamEmotion, DreamFragment, DreamPattern, Essence, Feather, Spirit, Weave, Whisper,
};
pub use notes::{Note, NoteSequence};
pub use quantum::{QuantumState, Superposition};

/// Clamps a value into [0, 1], mapping NaN to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
