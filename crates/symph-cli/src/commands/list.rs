//! List command implementation
//!
//! Lists the newest transactions involving an address.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use symph_spec::{validate_address, TransactionSource};

use super::json_output::{emit, error_codes, JsonError, ListResult};
use super::reporting::short_signature;
use crate::config::SymphConfig;

/// Run the list command
///
/// # Arguments
/// * `address` - Account to list (default: the configured token address)
/// * `limit` - Maximum number of transactions (default: `list_limit`)
/// * `config` - Resolved configuration
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    address: Option<&str>,
    limit: Option<usize>,
    config: &SymphConfig,
    json_output: bool,
) -> Result<ExitCode> {
    let outcome = list(address, limit, config);
    if json_output {
        return emit(outcome);
    }

    let result = outcome?;
    println!(
        "{} {} (newest {})",
        "Transactions for".cyan().bold(),
        result.address,
        result.limit
    );
    if result.transactions.is_empty() {
        println!("  {}", "no transactions".dimmed());
        return Ok(ExitCode::SUCCESS);
    }
    for tx in &result.transactions {
        let status = if tx.is_failed() {
            tx.status.as_str().red()
        } else {
            tx.status.as_str().green()
        };
        println!(
            "  {:<19} {:<8} {:<7} {:>12.6} SOL  {}",
            short_signature(&tx.signature),
            tx.tx_type.as_str(),
            status,
            tx.fee,
            tx.timestamp.dimmed()
        );
    }
    Ok(ExitCode::SUCCESS)
}

/// Lists transactions from the configured source.
///
/// An invalid address is reported as an error here, although the source
/// itself would only answer with an empty list.
pub fn list(
    address: Option<&str>,
    limit: Option<usize>,
    config: &SymphConfig,
) -> Result<ListResult, JsonError> {
    let address = address.unwrap_or(&config.token_address).trim().to_string();
    validate_address(&address)
        .map_err(|e| JsonError::new(error_codes::INVALID_ADDRESS, e.to_string()))?;

    let limit = limit.unwrap_or(config.list_limit);
    if limit == 0 {
        return Err(JsonError::new(
            error_codes::INVALID_ARGUMENT,
            "limit must be positive",
        ));
    }

    let source = config.transaction_source().ok_or_else(|| {
        JsonError::new(error_codes::NO_SOURCE, "no transaction source configured")
            .with_suggestion(format!(
                "set {} or transactions_path",
                crate::config::ENV_TRANSACTIONS
            ))
    })?;

    Ok(ListResult {
        transactions: source.list(&address, limit),
        address,
        limit,
    })
}
