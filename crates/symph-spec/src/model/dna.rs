//! Transaction DNA: a base motif plus structured perturbations.

use serde::{Deserialize, Serialize};

/// Kind of perturbation a mutation applies to the base motif.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationKind {
    /// Scale the degree at `position` up by `1 + intensity`.
    Amplify,
    /// Scale the degree at `position` down by `1 - intensity`.
    Diminish,
    /// Transpose the degree at `position` by `round(intensity * 12)` steps.
    Shift,
    /// Reverse the motif from `position` to the end.
    Mirror,
    /// Add a boost that halves at every step from `position` onward.
    Cascade,
}

impl MutationKind {
    /// Returns the kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationKind::Amplify => "amplify",
            MutationKind::Diminish => "diminish",
            MutationKind::Shift => "shift",
            MutationKind::Mirror => "mirror",
            MutationKind::Cascade => "cascade",
        }
    }
}

impl std::fmt::Display for MutationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structured perturbation of the base motif.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mutation {
    /// What the mutation does.
    #[serde(rename = "type")]
    pub kind: MutationKind,
    /// Index into the base motif.
    pub position: usize,
    /// Strength in [0, 1].
    pub intensity: f64,
}

impl Mutation {
    /// Creates a mutation, clamping intensity into [0, 1].
    pub fn new(kind: MutationKind, position: usize, intensity: f64) -> Self {
        Self {
            kind,
            position,
            intensity: super::clamp_unit(intensity),
        }
    }
}

/// Base motif, mutations and derived metrics for one transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnaSequence {
    /// Base 4-degree motif selected by transaction type.
    pub pattern: [u8; 4],
    /// Mutations in the order their rules fired.
    pub mutations: Vec<Mutation>,
    /// Transaction impact in [0, 1].
    pub energy: f64,
    /// Pattern uniqueness in [0, 1].
    pub rarity: f64,
}

impl DnaSequence {
    /// Applies the mutations, in order, to the base motif.
    ///
    /// Returns fractional scale degrees; positions past the end of the motif
    /// act on the last degree.
    ///
    /// # Example
    /// ```
    /// use symph_spec::{DnaSequence, Mutation, MutationKind};
    ///
    /// let dna = DnaSequence {
    ///     pattern: [1, 5, 3, 8],
    ///     mutations: vec![Mutation::new(MutationKind::Amplify, 2, 0.5)],
    ///     energy: 1.0,
    ///     rarity: 0.1,
    /// };
    /// assert_eq!(dna.express(), vec![1.0, 5.0, 4.5, 8.0]);
    /// ```
    pub fn express(&self) -> Vec<f64> {
        let mut degrees: Vec<f64> = self.pattern.iter().map(|&d| d as f64).collect();
        let last = degrees.len() - 1;

        for mutation in &self.mutations {
            let pos = mutation.position.min(last);
            let intensity = mutation.intensity;
            match mutation.kind {
                MutationKind::Amplify => degrees[pos] *= 1.0 + intensity,
                MutationKind::Diminish => degrees[pos] *= 1.0 - intensity,
                MutationKind::Shift => degrees[pos] += (intensity * 12.0).round(),
                MutationKind::Mirror => degrees[pos..].reverse(),
                MutationKind::Cascade => {
                    for (step, degree) in degrees[pos..].iter_mut().enumerate() {
                        *degree += intensity / 2f64.powi(step as i32);
                    }
                }
            }
        }

        degrees
    }

    /// Maps the expressed motif to frequencies.
    ///
    /// Degree 1 sounds at `base_frequency`; each further degree is one
    /// equal-tempered semitone higher.
    pub fn motif_frequencies(&self, base_frequency: f64) -> Vec<f64> {
        self.express()
            .into_iter()
            .map(|degree| base_frequency * 2f64.powf((degree - 1.0) / 12.0))
            .collect()
    }

    /// Returns true if any mutation of the given kind is present.
    pub fn has_mutation(&self, kind: MutationKind) -> bool {
        self.mutations.iter().any(|m| m.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dna(pattern: [u8; 4], mutations: Vec<Mutation>) -> DnaSequence {
        DnaSequence {
            pattern,
            mutations,
            energy: 0.0,
            rarity: 0.0,
        }
    }

    #[test]
    fn test_express_without_mutations_is_pattern() {
        assert_eq!(dna([1, 3, 8, 5], vec![]).express(), vec![1.0, 3.0, 8.0, 5.0]);
    }

    #[test]
    fn test_amplify_then_cascade() {
        let seq = dna(
            [1, 5, 3, 8],
            vec![
                Mutation::new(MutationKind::Amplify, 2, 0.5),
                Mutation::new(MutationKind::Cascade, 0, 1.0),
            ],
        );
        assert_eq!(seq.express(), vec![2.0, 5.5, 4.75, 8.125]);
    }

    #[test]
    fn test_reserved_kinds() {
        let seq = dna(
            [1, 3, 5, 8],
            vec![
                Mutation::new(MutationKind::Diminish, 3, 0.5),
                Mutation::new(MutationKind::Shift, 0, 0.25),
                Mutation::new(MutationKind::Mirror, 1, 1.0),
            ],
        );
        // diminish: [1,3,5,4]; shift +3: [4,3,5,4]; mirror from 1: [4,4,5,3]
        assert_eq!(seq.express(), vec![4.0, 4.0, 5.0, 3.0]);
    }

    #[test]
    fn test_out_of_range_position_targets_last_degree() {
        let seq = dna([1, 1, 1, 1], vec![Mutation::new(MutationKind::Amplify, 9, 1.0)]);
        assert_eq!(seq.express(), vec![1.0, 1.0, 1.0, 2.0]);
    }

    #[test]
    fn test_motif_frequencies() {
        let freqs = dna([1, 13, 1, 1], vec![]).motif_frequencies(220.0);
        assert!((freqs[0] - 220.0).abs() < 1e-9);
        assert!((freqs[1] - 440.0).abs() < 1e-9);
    }

    #[test]
    fn test_mutation_intensity_clamped() {
        assert_eq!(Mutation::new(MutationKind::Amplify, 0, 7.0).intensity, 1.0);
        assert_eq!(Mutation::new(MutationKind::Amplify, 0, -1.0).intensity, 0.0);
    }

    #[test]
    fn test_mutation_json_uses_type_key() {
        let json = serde_json::to_value(Mutation::new(MutationKind::Cascade, 0, 1.0)).unwrap();
        assert_eq!(json["type"], "cascade");
        assert_eq!(json["position"], 0);
    }
}
