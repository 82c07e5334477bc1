//! Transaction lookup contract and the bundled sources.
//!
//! The lookup service is an external collaborator. Its contract is narrow:
//!
//! - `lookup(signature)` returns the transaction, or `None` on not-found or
//!   any error
//! - `list(address, limit)` returns the newest transactions touching the
//!   address, or an empty list on error or an invalid address
//!
//! Neither call panics or returns an error across this boundary; failures are
//! logged and degrade to "no data".

mod classify;
mod json_file;
mod memory;
mod record;

pub use classify::{classify_logs, classify_type_label};
pub use json_file::JsonFileSource;
pub use memory::MemorySource;
pub use record::{EnhancedTransaction, TokenTransfer, LAMPORTS_PER_SOL};

use crate::transaction::Transaction;
use crate::validation::validate_address;

/// A service that can look up and list transactions.
pub trait TransactionSource {
    /// Looks up one transaction by signature.
    fn lookup(&self, signature: &str) -> Option<Transaction>;

    /// Lists up to `limit` transactions touching `address`, newest first.
    fn list(&self, address: &str, limit: usize) -> Vec<Transaction>;
}

/// Lookup over a slice of records.
pub(crate) fn lookup_in(records: &[EnhancedTransaction], signature: &str) -> Option<Transaction> {
    if signature.is_empty() {
        log::warn!("lookup called with an empty signature");
        return None;
    }
    let found = records.iter().find(|r| r.signature == signature);
    if found.is_none() {
        log::debug!("transaction not found: {}", signature);
    }
    found.map(EnhancedTransaction::to_transaction)
}

/// Listing over a slice of records.
pub(crate) fn list_in(
    records: &[EnhancedTransaction],
    address: &str,
    limit: usize,
) -> Vec<Transaction> {
    if let Err(e) = validate_address(address) {
        log::warn!("refusing to list transactions: {}", e);
        return Vec::new();
    }

    let mut matching: Vec<&EnhancedTransaction> =
        records.iter().filter(|r| r.involves(address)).collect();
    // Newest first; records without a block time sort last.
    matching.sort_by(|a, b| b.timestamp.unwrap_or(i64::MIN).cmp(&a.timestamp.unwrap_or(i64::MIN)));

    matching
        .into_iter()
        .take(limit)
        .map(EnhancedTransaction::to_transaction)
        .collect()
}
