//! Wire shape of the enhanced-transaction records returned by the lookup API.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use super::classify::{classify_logs, classify_type_label};
use crate::transaction::{Transaction, TransactionStatus, TransactionType};

/// Lamports in one SOL.
pub const LAMPORTS_PER_SOL: f64 = 1e9;

/// A token movement inside a transaction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTransfer {
    /// Mint address of the moved token.
    #[serde(default)]
    pub mint: Option<String>,
    /// Sending wallet.
    #[serde(default)]
    pub from_user_account: Option<String>,
    /// Receiving wallet.
    #[serde(default)]
    pub to_user_account: Option<String>,
    /// Amount in whole tokens.
    #[serde(default)]
    pub token_amount: f64,
}

/// One record as served by the enhanced-transactions endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedTransaction {
    /// Base58 transaction signature.
    pub signature: String,
    /// Unix block time in seconds.
    #[serde(default)]
    pub timestamp: Option<i64>,
    /// Fee in lamports.
    #[serde(default)]
    pub fee: Option<u64>,
    /// Provider type label such as `"SWAP"` or `"TOKEN_MINT"`.
    #[serde(rename = "type", default)]
    pub tx_type: Option<String>,
    /// Program or marketplace that produced the transaction.
    #[serde(default)]
    pub source: Option<String>,
    /// Human-readable summary from the provider.
    #[serde(default)]
    pub description: Option<String>,
    /// Account that paid the fee.
    #[serde(default)]
    pub fee_payer: Option<String>,
    /// Non-null when the transaction failed.
    #[serde(default)]
    pub transaction_error: Option<serde_json::Value>,
    /// Token movements, in instruction order.
    #[serde(default)]
    pub token_transfers: Vec<TokenTransfer>,
    /// Program log lines, used to classify untyped records.
    #[serde(default)]
    pub log_messages: Vec<String>,
}

impl EnhancedTransaction {
    /// Returns true if the address paid the fee or appears in a token transfer.
    pub fn involves(&self, address: &str) -> bool {
        self.fee_payer.as_deref() == Some(address)
            || self.token_transfers.iter().any(|t| {
                t.mint.as_deref() == Some(address)
                    || t.from_user_account.as_deref() == Some(address)
                    || t.to_user_account.as_deref() == Some(address)
            })
    }

    /// Resolves the transaction type from the label, then from the logs.
    pub fn resolved_type(&self) -> TransactionType {
        self.tx_type
            .as_deref()
            .and_then(classify_type_label)
            .or_else(|| classify_logs(&self.log_messages))
            .unwrap_or(TransactionType::Unknown)
    }

    /// Converts the record into the generator input type.
    pub fn to_transaction(&self) -> Transaction {
        let timestamp = self
            .timestamp
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_default();

        let value = if self.token_transfers.is_empty() {
            None
        } else {
            Some(self.token_transfers.iter().map(|t| t.token_amount).sum())
        };

        let failed = matches!(&self.transaction_error, Some(err) if !err.is_null());

        Transaction {
            signature: self.signature.clone(),
            tx_type: self.resolved_type(),
            timestamp,
            fee: self.fee.unwrap_or(0) as f64 / LAMPORTS_PER_SOL,
            value,
            status: if failed {
                TransactionStatus::Failed
            } else {
                TransactionStatus::Success
            },
            description: self.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYER: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

    fn sample() -> EnhancedTransaction {
        serde_json::from_str(
            r#"{
                "signature": "ab12cd",
                "timestamp": 1700000000,
                "fee": 5000,
                "type": "SWAP",
                "description": "swapped 1 SOL",
                "feePayer": "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA",
                "transactionError": null,
                "tokenTransfers": [
                    {"mint": "m", "fromUserAccount": "a", "toUserAccount": "b", "tokenAmount": 1500.5},
                    {"mint": "m", "fromUserAccount": "b", "toUserAccount": "a", "tokenAmount": 10}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_conversion() {
        let tx = sample().to_transaction();
        assert_eq!(tx.signature, "ab12cd");
        assert_eq!(tx.tx_type, TransactionType::Swap);
        assert_eq!(tx.timestamp, "2023-11-14T22:13:20+00:00");
        assert!((tx.fee - 0.000005).abs() < 1e-15);
        assert_eq!(tx.value, Some(1510.5));
        assert_eq!(tx.status, TransactionStatus::Success);
        assert_eq!(tx.description.as_deref(), Some("swapped 1 SOL"));
    }

    #[test]
    fn test_error_marks_failed() {
        let mut record = sample();
        record.transaction_error = Some(serde_json::json!({"InstructionError": [0, "Custom"]}));
        assert_eq!(record.to_transaction().status, TransactionStatus::Failed);
    }

    #[test]
    fn test_involves() {
        let record = sample();
        assert!(record.involves(PAYER));
        assert!(record.involves("m"));
        assert!(record.involves("b"));
        assert!(!record.involves("zzz"));
    }

    #[test]
    fn test_minimal_record() {
        let record: EnhancedTransaction = serde_json::from_str(r#"{"signature": "ff"}"#).unwrap();
        let tx = record.to_transaction();
        assert_eq!(tx.tx_type, TransactionType::Unknown);
        assert_eq!(tx.timestamp, "");
        assert_eq!(tx.fee, 0.0);
        assert_eq!(tx.value, None);
    }
}
