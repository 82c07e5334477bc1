//! In-memory lookup service.

use super::record::EnhancedTransaction;
use super::{list_in, lookup_in, TransactionSource};
use crate::transaction::Transaction;

/// Serves transactions from records held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<EnhancedTransaction>,
}

impl MemorySource {
    /// Creates a source over the given records.
    pub fn new(records: Vec<EnhancedTransaction>) -> Self {
        Self { records }
    }

    /// Adds a record.
    pub fn push(&mut self, record: EnhancedTransaction) {
        self.records.push(record);
    }

    /// Returns the number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records are held.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TransactionSource for MemorySource {
    fn lookup(&self, signature: &str) -> Option<Transaction> {
        lookup_in(&self.records, signature)
    }

    fn list(&self, address: &str, limit: usize) -> Vec<Transaction> {
        list_in(&self.records, address, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_signature_lookup() {
        let mut source = MemorySource::default();
        source.push(EnhancedTransaction {
            signature: "ab".to_string(),
            ..Default::default()
        });
        assert_eq!(source.len(), 1);
        assert!(source.lookup("").is_none());
        assert!(source.lookup("ab").is_some());
    }
}
