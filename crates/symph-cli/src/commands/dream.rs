//! Dream command implementation
//!
//! Captures a decorative dream fragment. Fragments are random unless
//! `--seeded` asks for the signature-derived stream.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use symph_backend_music::DreamCatcher;
use symph_spec::Transaction;

use super::json_output::{emit, DreamResult};
use super::reporting::print_transaction;
use crate::config::SymphConfig;
use crate::input::{self, TxArgs};

/// Run the dream command
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(args: &TxArgs, seeded: bool, config: &SymphConfig, json_output: bool) -> Result<ExitCode> {
    let tx = input::resolve(args, config);
    if json_output {
        return emit(tx.map_err(|e| e.to_json()).map(|tx| capture(&tx, seeded)));
    }

    let tx = tx?;
    let result = capture(&tx, seeded);
    let dream = &result.dream;

    println!("{}", "Dream:".cyan().bold());
    print_transaction(&tx);
    println!();
    println!("{}", "Essence".bold());
    println!("  {} {}", "color:".dimmed(), dream.essence.color);
    println!("  {} {:.3}", "intensity:".dimmed(), dream.essence.intensity);
    println!("  {} {:?}", "emotion:".dimmed(), dream.essence.emotion);
    println!("  {} {}", "memory:".dimmed(), dream.essence.memory.join(" "));
    println!("{}", "Weave".bold());
    println!("  {} {:?}", "pattern:".dimmed(), dream.weave.pattern);
    println!(
        "  {} {} beads, {} feathers",
        "ornaments:".dimmed(),
        dream.weave.beads.len(),
        dream.weave.feathers.len()
    );
    println!("{}", "Spirit".bold());
    println!("  {} {:.3}", "energy:".dimmed(), dream.spirit.energy);
    println!("  {} {}", "resonance:".dimmed(), dream.spirit.resonance.join(", "));
    for whisper in &dream.spirit.whispers {
        println!(
            "  {} {} at {:.1} Hz",
            "~".magenta(),
            whisper.message,
            whisper.frequency
        );
    }
    if !seeded {
        println!();
        println!(
            "{} fragment is random; pass --seeded for a reproducible one",
            "!".yellow()
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Captures a fragment for the transaction.
pub fn capture(tx: &Transaction, seeded: bool) -> DreamResult {
    let catcher = DreamCatcher::new();
    let dream = if seeded {
        catcher.capture_seeded(tx)
    } else {
        catcher.capture(tx)
    };
    DreamResult {
        signature: tx.signature.clone(),
        seeded,
        dream,
    }
}
