//! DNA command implementation

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use symph_backend_music::TransactionDna;
use symph_spec::Transaction;

use super::json_output::{emit, DnaResult};
use super::reporting::{format_frequencies, print_transaction};
use crate::config::SymphConfig;
use crate::input::{self, TxArgs};

/// Run the dna command
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(args: &TxArgs, config: &SymphConfig, json_output: bool) -> Result<ExitCode> {
    let tx = input::resolve(args, config);
    if json_output {
        return emit(tx.map_err(|e| e.to_json()).map(|tx| analyze(&tx, config)));
    }

    let tx = tx?;
    let result = analyze(&tx, config);
    let dna = &result.dna;

    println!("{}", "Transaction DNA:".cyan().bold());
    print_transaction(&tx);
    println!();
    println!(
        "{} {:?}",
        "Pattern:".dimmed(),
        dna.pattern
    );
    if dna.mutations.is_empty() {
        println!("{} none", "Mutations:".dimmed());
    } else {
        println!("{}", "Mutations:".dimmed());
        for m in &dna.mutations {
            println!(
                "  {} {:<8} @{} intensity {:.2}",
                "-".yellow(),
                m.kind.as_str(),
                m.position,
                m.intensity
            );
        }
    }
    println!("{} {:.3}", "Energy:".dimmed(), dna.energy);
    println!("{} {:.3}", "Rarity:".dimmed(), dna.rarity);
    println!("{} {}", "Motif (Hz):".dimmed(), format_frequencies(&result.motif));

    Ok(ExitCode::SUCCESS)
}

/// Analyzes a transaction and expresses its motif above the base frequency.
pub fn analyze(tx: &Transaction, config: &SymphConfig) -> DnaResult {
    let dna = TransactionDna::new().analyze(tx);
    DnaResult {
        signature: tx.signature.clone(),
        motif: dna.motif_frequencies(config.base_frequency),
        dna,
    }
}
