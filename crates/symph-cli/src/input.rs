//! Transaction input for commands.
//!
//! A command either describes a transaction inline (`--signature` with
//! optional `--tx-type`, `--value`, `--fee`) or fetches one from the
//! configured source with `--lookup <signature>`.

use clap::Args;
use thiserror::Error;

use symph_spec::{
    validate_signature, SpecError, Transaction, TransactionSource, TransactionType,
};

use crate::commands::json_output::{error_codes, JsonError};
use crate::config::SymphConfig;

/// Transaction arguments shared by the generator commands.
#[derive(Args, Debug, Clone)]
pub struct TxArgs {
    /// Transaction signature (hex or base58)
    #[arg(short, long, conflicts_with = "lookup")]
    pub signature: Option<String>,

    /// Transaction type (mint, burn, swap, transfer, nft, defi, unknown)
    #[arg(short = 't', long, default_value = "transfer")]
    pub tx_type: TransactionType,

    /// Transferred token amount
    #[arg(long)]
    pub value: Option<f64>,

    /// Fee in SOL
    #[arg(long, default_value_t = 0.0)]
    pub fee: f64,

    /// Fetch the transaction with this signature from the configured source
    #[arg(long)]
    pub lookup: Option<String>,
}

impl Default for TxArgs {
    fn default() -> Self {
        Self {
            signature: None,
            tx_type: TransactionType::Transfer,
            value: None,
            fee: 0.0,
            lookup: None,
        }
    }
}

impl TxArgs {
    /// Inline arguments for a signature, as the terminal builds them.
    pub fn inline(signature: impl Into<String>, tx_type: TransactionType) -> Self {
        Self {
            signature: Some(signature.into()),
            tx_type,
            ..Default::default()
        }
    }
}

/// Why a transaction could not be resolved.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("either --signature or --lookup is required")]
    MissingSignature,

    #[error(transparent)]
    Signature(#[from] SpecError),

    #[error("value and fee must be finite and non-negative")]
    InvalidAmount,

    #[error("no transaction source configured; set {} or transactions_path", crate::config::ENV_TRANSACTIONS)]
    NoSource,

    #[error("transaction not found: {0}")]
    NotFound(String),
}

impl InputError {
    /// Stable CLI error code.
    pub fn code(&self) -> &'static str {
        match self {
            InputError::MissingSignature | InputError::Signature(_) => {
                error_codes::INVALID_SIGNATURE
            }
            InputError::InvalidAmount => error_codes::INVALID_ARGUMENT,
            InputError::NoSource => error_codes::NO_SOURCE,
            InputError::NotFound(_) => error_codes::NOT_FOUND,
        }
    }

    pub fn to_json(&self) -> JsonError {
        JsonError::new(self.code(), self.to_string())
    }
}

/// Resolves the arguments to a transaction.
pub fn resolve(args: &TxArgs, config: &SymphConfig) -> Result<Transaction, InputError> {
    if let Some(signature) = &args.lookup {
        return lookup(signature, config);
    }

    let signature = args.signature.as_deref().ok_or(InputError::MissingSignature)?;
    validate_signature(signature)?;

    let amounts_ok = args.fee.is_finite()
        && args.fee >= 0.0
        && args.value.map_or(true, |v| v.is_finite() && v >= 0.0);
    if !amounts_ok {
        return Err(InputError::InvalidAmount);
    }

    let mut builder = Transaction::builder(signature, args.tx_type).fee(args.fee);
    if let Some(value) = args.value {
        builder = builder.value(value);
    }
    Ok(builder.build())
}

/// Fetches a transaction from the configured source.
pub fn lookup(signature: &str, config: &SymphConfig) -> Result<Transaction, InputError> {
    validate_signature(signature)?;
    let source = config.transaction_source().ok_or(InputError::NoSource)?;
    source
        .lookup(signature)
        .ok_or_else(|| InputError::NotFound(signature.to_string()))
}
