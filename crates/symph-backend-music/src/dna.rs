//! Transaction DNA analysis.
//!
//! A transaction's DNA is a four-degree base motif chosen by type, perturbed
//! by mutations that fire on value and fee thresholds.

use symph_spec::model::clamp_unit;
use symph_spec::{DnaSequence, Mutation, MutationKind, Transaction, TransactionType};

/// Value above which the amplify mutation fires.
pub const AMPLIFY_VALUE_THRESHOLD: f64 = 1000.0;

/// Fee (in SOL) above which the cascade mutation fires.
pub const CASCADE_FEE_THRESHOLD: f64 = 0.1;

/// Returns the base motif for a transaction type.
///
/// Types without a motif of their own use the transfer motif.
pub fn base_pattern(tx_type: TransactionType) -> [u8; 4] {
    match tx_type {
        TransactionType::Mint => [1, 3, 5, 8],
        TransactionType::Burn => [8, 5, 3, 1],
        TransactionType::Swap => [1, 5, 3, 8],
        _ => [1, 3, 8, 5],
    }
}

/// Analyzes transactions into [`DnaSequence`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionDna;

impl TransactionDna {
    /// Creates an analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Analyzes a transaction.
    ///
    /// Never fails: a missing value counts as zero, and non-finite numbers
    /// fire no mutations and contribute no energy.
    ///
    /// # Example
    /// ```
    /// use symph_backend_music::TransactionDna;
    /// use symph_spec::{MutationKind, Transaction, TransactionType};
    ///
    /// let tx = Transaction::builder("5Kt3", TransactionType::Swap)
    ///     .value(5000.0)
    ///     .fee(0.2)
    ///     .build();
    /// let dna = TransactionDna::new().analyze(&tx);
    /// assert_eq!(dna.energy, 1.0);
    /// assert_eq!(dna.mutations[0].kind, MutationKind::Amplify);
    /// assert_eq!(dna.mutations[1].kind, MutationKind::Cascade);
    /// ```
    pub fn analyze(&self, tx: &Transaction) -> DnaSequence {
        let value = finite_or_zero(tx.value_or_zero());
        let fee = finite_or_zero(tx.fee);

        let mutations = detect_mutations(value, fee);
        let energy = clamp_unit((value + fee * 100.0) / 1000.0);
        let rarity = clamp_unit(mutations.len() as f64 / 10.0);

        DnaSequence {
            pattern: base_pattern(tx.tx_type),
            mutations,
            energy,
            rarity,
        }
    }
}

/// Mutation rules, evaluated independently in a fixed order.
fn detect_mutations(value: f64, fee: f64) -> Vec<Mutation> {
    let mut mutations = Vec::new();

    if value > AMPLIFY_VALUE_THRESHOLD {
        mutations.push(Mutation::new(
            MutationKind::Amplify,
            2,
            (value / 10_000.0).min(1.0),
        ));
    }

    if fee > CASCADE_FEE_THRESHOLD {
        mutations.push(Mutation::new(MutationKind::Cascade, 0, (fee * 10.0).min(1.0)));
    }

    mutations
}

fn finite_or_zero(x: f64) -> f64 {
    if x.is_finite() {
        x
    } else {
        0.0
    }
}
