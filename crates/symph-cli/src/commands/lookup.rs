//! Lookup command implementation

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use super::json_output::emit;
use super::reporting::print_transaction;
use crate::config::SymphConfig;
use crate::input;

/// Run the lookup command
///
/// # Returns
/// Exit code: 0 if found, 1 otherwise
pub fn run(signature: &str, config: &SymphConfig, json_output: bool) -> Result<ExitCode> {
    let tx = input::lookup(signature, config);
    if json_output {
        return emit(tx.map_err(|e| e.to_json()));
    }

    let tx = tx?;
    println!("{}", "Transaction:".cyan().bold());
    print_transaction(&tx);
    Ok(ExitCode::SUCCESS)
}
