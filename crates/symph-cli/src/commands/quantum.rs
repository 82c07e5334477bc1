//! Quantum command implementation

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use symph_backend_music::QuantumHarmonics;
use symph_spec::Transaction;

use super::json_output::{emit, JsonError, QuantumResult};
use super::reporting::{format_frequencies, print_transaction};
use crate::config::SymphConfig;
use crate::input::{self, TxArgs};

/// Run the quantum command
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(args: &TxArgs, config: &SymphConfig, json_output: bool) -> Result<ExitCode> {
    let tx = input::resolve(args, config);
    if json_output {
        return emit(
            tx.map_err(|e| e.to_json())
                .and_then(|tx| generate(&tx, config)),
        );
    }

    let tx = tx?;
    let result = generate(&tx, config)?;
    let state = &result.state;

    println!("{}", "Quantum Harmonics:".cyan().bold());
    print_transaction(&tx);
    println!();
    println!("{} {:.4}", "Amplitude:".dimmed(), state.amplitude);
    println!("{} {:.7}", "Phase:".dimmed(), state.phase);
    println!("{} {:.4}", "Entanglement:".dimmed(), state.entanglement);
    println!(
        "{} {}",
        "Melody:".dimmed(),
        format_frequencies(&state.superposition.melody)
    );
    println!(
        "{} {}",
        "Harmony:".dimmed(),
        format_frequencies(&state.superposition.harmony)
    );
    println!(
        "{} {}",
        "Rhythm:".dimmed(),
        format_frequencies(&state.superposition.rhythm)
    );
    println!("{} {:.2}s", "Duration:".dimmed(), result.duration_seconds);

    Ok(ExitCode::SUCCESS)
}

/// Generates the quantum state of a transaction.
pub fn generate(tx: &Transaction, config: &SymphConfig) -> Result<QuantumResult, JsonError> {
    let state = QuantumHarmonics::new()
        .generate(tx)
        .map_err(|e| JsonError::from_backend(&e))?;
    Ok(QuantumResult {
        signature: tx.signature.clone(),
        duration_seconds: state.duration(config.step_seconds),
        state,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use symph_spec::TransactionType;

    #[test]
    fn test_phase_of_low_prefix() {
        let tx = Transaction::builder("0000ffffab12", TransactionType::Swap).build();
        let result = generate(&tx, &SymphConfig::default()).unwrap();
        assert!((result.state.phase - 0.0000153).abs() < 1e-6);
        assert_eq!(result.state.superposition.melody.len(), 12);
        assert!((result.duration_seconds - 12.0 * 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_entanglement_is_reproducible() {
        let tx = Transaction::builder("ab12cd34", TransactionType::Swap).build();
        let a = generate(&tx, &SymphConfig::default()).unwrap();
        let b = generate(&tx, &SymphConfig::default()).unwrap();
        assert_eq!(a.state, b.state);
    }
}
