//! The transaction input type.

use serde::{Deserialize, Serialize};

/// Kind of on-chain activity a transaction represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Token mint.
    Mint,
    /// Token burn.
    Burn,
    /// DEX swap.
    Swap,
    /// Plain transfer.
    Transfer,
    /// NFT activity.
    Nft,
    /// Deposit or withdrawal against a DeFi program.
    Defi,
    /// Anything the classifier could not place.
    #[default]
    #[serde(other)]
    Unknown,
}

impl TransactionType {
    /// Returns the type as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Mint => "mint",
            TransactionType::Burn => "burn",
            TransactionType::Swap => "swap",
            TransactionType::Transfer => "transfer",
            TransactionType::Nft => "nft",
            TransactionType::Defi => "defi",
            TransactionType::Unknown => "unknown",
        }
    }

    /// Returns all transaction types.
    pub fn all() -> &'static [TransactionType] {
        &[
            TransactionType::Mint,
            TransactionType::Burn,
            TransactionType::Swap,
            TransactionType::Transfer,
            TransactionType::Nft,
            TransactionType::Defi,
            TransactionType::Unknown,
        ]
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mint" => Ok(TransactionType::Mint),
            "burn" => Ok(TransactionType::Burn),
            "swap" => Ok(TransactionType::Swap),
            "transfer" => Ok(TransactionType::Transfer),
            "nft" => Ok(TransactionType::Nft),
            "defi" => Ok(TransactionType::Defi),
            "unknown" => Ok(TransactionType::Unknown),
            _ => Err(format!("unknown transaction type: {}", s)),
        }
    }
}

/// Whether the transaction landed successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    /// Executed without error.
    #[default]
    Success,
    /// Executed with an error.
    Failed,
}

impl TransactionStatus {
    /// Returns the status as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Success => "success",
            TransactionStatus::Failed => "failed",
        }
    }
}

/// A fetched transaction.
///
/// Read-only once fetched. Generators borrow it and never mutate it; nothing
/// caches it after the selection that produced it is consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque identifier; the source of determinism for every generator.
    pub signature: String,
    /// Activity kind.
    #[serde(rename = "type", default)]
    pub tx_type: TransactionType,
    /// Block time, formatted as RFC 3339 when known.
    #[serde(default)]
    pub timestamp: String,
    /// Fee in native units (SOL).
    #[serde(default)]
    pub fee: f64,
    /// Transferred token amount, when the source reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Execution status.
    #[serde(default)]
    pub status: TransactionStatus,
    /// Human-readable description from the lookup service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    /// Creates a new builder for a transaction.
    pub fn builder(signature: impl Into<String>, tx_type: TransactionType) -> TransactionBuilder {
        TransactionBuilder::new(signature, tx_type)
    }

    /// Returns the value, treating a missing value as zero.
    pub fn value_or_zero(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }

    /// Returns true if the transaction failed on chain.
    pub fn is_failed(&self) -> bool {
        self.status == TransactionStatus::Failed
    }
}

/// Builder for [`Transaction`].
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    tx: Transaction,
}

impl TransactionBuilder {
    /// Creates a builder with zero fee, no value and success status.
    pub fn new(signature: impl Into<String>, tx_type: TransactionType) -> Self {
        Self {
            tx: Transaction {
                signature: signature.into(),
                tx_type,
                timestamp: String::new(),
                fee: 0.0,
                value: None,
                status: TransactionStatus::Success,
                description: None,
            },
        }
    }

    /// Sets the fee.
    pub fn fee(mut self, fee: f64) -> Self {
        self.tx.fee = fee;
        self
    }

    /// Sets the value.
    pub fn value(mut self, value: f64) -> Self {
        self.tx.value = Some(value);
        self
    }

    /// Sets the timestamp.
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.tx.timestamp = timestamp.into();
        self
    }

    /// Sets the status.
    pub fn status(mut self, status: TransactionStatus) -> Self {
        self.tx.status = status;
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.tx.description = Some(description.into());
        self
    }

    /// Builds the transaction.
    pub fn build(self) -> Transaction {
        self.tx
    }
}
