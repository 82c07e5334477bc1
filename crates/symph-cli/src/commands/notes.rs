//! Notes command implementation
//!
//! Maps a transaction signature to its note sequence.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use symph_backend_music::{MappingMode, NoteMapper};
use symph_spec::Transaction;

use super::json_output::{emit, JsonError, NotesResult};
use super::reporting::print_transaction;
use crate::config::SymphConfig;
use crate::input::{self, TxArgs};

/// Run the notes command
///
/// # Arguments
/// * `args` - Transaction arguments
/// * `palette` - Use the type palette instead of equal temperament
/// * `config` - Resolved configuration
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(args: &TxArgs, palette: bool, config: &SymphConfig, json_output: bool) -> Result<ExitCode> {
    let tx = input::resolve(args, config);
    if json_output {
        return emit(
            tx.map_err(|e| e.to_json())
                .and_then(|tx| generate(&tx, palette, config)),
        );
    }

    let tx = tx?;
    let result = generate(&tx, palette, config)?;

    println!("{}", "Notes:".cyan().bold());
    print_transaction(&tx);
    println!("{} {}", "Mode:".dimmed(), result.mode);
    println!();
    for (i, note) in result.notes.notes.iter().enumerate() {
        match &note.name {
            Some(name) => println!("  {:>3}  {:<4} {:>8.2} Hz", i, name, note.frequency),
            None => println!("  {:>3}  {:>13.2} Hz", i, note.frequency),
        }
    }
    println!();
    println!(
        "{} {} notes, {:.2}s",
        "Sequence:".dimmed(),
        result.notes.len(),
        result.duration_seconds
    );

    Ok(ExitCode::SUCCESS)
}

/// Maps a transaction's signature with the configured base frequency.
pub fn generate(tx: &Transaction, palette: bool, config: &SymphConfig) -> Result<NotesResult, JsonError> {
    let mode = if palette {
        MappingMode::Palette
    } else {
        MappingMode::EqualTempered
    };
    let mapper = NoteMapper::new()
        .with_mode(mode)
        .with_base_frequency(config.base_frequency)
        .map_err(|e| JsonError::from_backend(&e))?;
    let notes = mapper
        .map_transaction(tx)
        .map_err(|e| JsonError::from_backend(&e))?;

    Ok(NotesResult {
        signature: tx.signature.clone(),
        tx_type: tx.tx_type,
        mode: if palette { "palette" } else { "equal_tempered" }.to_string(),
        duration_seconds: notes.duration(config.step_seconds),
        notes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use symph_spec::TransactionType;

    #[test]
    fn test_hex_mapping() {
        let tx = Transaction::builder("ab12", TransactionType::Transfer).build();
        let result = generate(&tx, false, &SymphConfig::default()).unwrap();
        let expected = [391.995, 415.305, 233.082, 246.942];
        assert_eq!(result.notes.len(), expected.len());
        for (note, want) in result.notes.notes.iter().zip(expected) {
            assert!((note.frequency - want).abs() < 0.01);
        }
        assert!((result.duration_seconds - 0.8).abs() < 1e-9);
        assert_eq!(result.mode, "equal_tempered");
    }

    #[test]
    fn test_palette_mapping_names_notes() {
        let tx = Transaction::builder("ab12cd", TransactionType::Mint).build();
        let result = generate(&tx, true, &SymphConfig::default()).unwrap();
        assert_eq!(result.notes.len(), 3);
        assert!(result.notes.notes.iter().all(|n| n.name.is_some()));
    }

    #[test]
    fn test_empty_signature_keeps_backend_code() {
        let tx = Transaction::builder("", TransactionType::Mint).build();
        let err = generate(&tx, false, &SymphConfig::default()).unwrap_err();
        assert_eq!(err.code, "MUSIC_001");
    }
}
