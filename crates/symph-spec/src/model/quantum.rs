//! Quantum-harmonics state: three parallel voices and modulation scalars.
//!
//! "Superposition" here means three arrays played concurrently; no physical
//! quantum semantics are implied.

use serde::{Deserialize, Serialize};

/// Three parallel numeric sequences played simultaneously.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Superposition {
    /// One frequency per signature character.
    pub melody: Vec<f64>,
    /// The seven-note base table scaled by value.
    pub harmony: Vec<f64>,
    /// Four beat durations scaled by phase.
    pub rhythm: Vec<f64>,
}

/// Output of the quantum-harmonics generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantumState {
    /// Value impact in [0, 1].
    pub amplitude: f64,
    /// Signature-derived phase in [0, 1].
    pub phase: f64,
    /// Signature-derived coupling in [0, 1].
    pub entanglement: f64,
    /// The three voices.
    pub superposition: Superposition,
}

impl QuantumState {
    /// Nominal playback duration at a fixed per-step duration.
    pub fn duration(&self, step_seconds: f64) -> f64 {
        self.superposition.melody.len() as f64 * step_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_follows_melody() {
        let state = QuantumState {
            amplitude: 0.5,
            phase: 0.0,
            entanglement: 0.3,
            superposition: Superposition {
                melody: vec![261.63; 8],
                harmony: vec![261.63; 7],
                rhythm: vec![1.0, 0.5, 0.25, 0.125],
            },
        };
        assert!((state.duration(0.2) - 1.6).abs() < 1e-12);
    }
}
