//! Lookup service backed by a JSON export of enhanced-transaction records.

use std::fs;
use std::path::{Path, PathBuf};

use super::record::EnhancedTransaction;
use super::{list_in, lookup_in, TransactionSource};
use crate::error::SpecResult;
use crate::transaction::Transaction;

/// Reads transactions from a JSON file holding an array of records.
///
/// The file is re-read on every call; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and parses every record in the file.
    pub fn load(&self) -> SpecResult<Vec<EnhancedTransaction>> {
        let text = fs::read_to_string(&self.path)?;
        let records: Vec<EnhancedTransaction> = serde_json::from_str(&text)?;
        log::debug!(
            "loaded {} transaction records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    fn load_or_warn(&self) -> Option<Vec<EnhancedTransaction>> {
        match self.load() {
            Ok(records) => Some(records),
            Err(e) => {
                log::warn!("failed to read {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

impl TransactionSource for JsonFileSource {
    fn lookup(&self, signature: &str) -> Option<Transaction> {
        let records = self.load_or_warn()?;
        lookup_in(&records, signature)
    }

    fn list(&self, address: &str, limit: usize) -> Vec<Transaction> {
        match self.load_or_warn() {
            Some(records) => list_in(&records, address, limit),
            None => Vec::new(),
        }
    }
}
