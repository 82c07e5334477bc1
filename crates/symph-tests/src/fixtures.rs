//! Shared transaction fixtures.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use symph_cli::SymphConfig;
use symph_spec::{Transaction, TransactionType};

/// A real-length base58 transaction signature.
pub const BASE58_SIGNATURE: &str =
    "5VERv8NMvzbJMEkV8xnrLkEaWRtSz9CosKDYjCJjBRnbJLgp8uirBgmQpjKhoR4tjF3ZpRzrFmBV6UjKdiSZkQUW";

/// A short hex signature with a known note mapping.
pub const HEX_SIGNATURE: &str = "ab12cd34";

/// The token account the fixture records touch.
pub const TOKEN: &str = "7omp98JBaH3a9okQwwPCtGfHaZh4m4TRKqNuZAdBpump";

/// Another valid account that only appears in one record.
pub const WALLET: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

/// Enhanced-transaction records as the lookup endpoint serves them.
pub fn records_json() -> String {
    format!(
        r#"[
    {{
        "signature": "{base58}",
        "timestamp": 1700000000,
        "fee": 5000,
        "type": "SWAP",
        "feePayer": "{token}",
        "tokenTransfers": [
            {{"mint": "{token}", "fromUserAccount": "{wallet}", "toUserAccount": "{token}", "tokenAmount": 2500.0}}
        ]
    }},
    {{
        "signature": "aa02",
        "timestamp": 1700000300,
        "fee": 250000000,
        "feePayer": "{token}",
        "logMessages": ["Program log: Instruction: InitializeMint"]
    }},
    {{
        "signature": "aa03",
        "timestamp": 1700000200,
        "type": "TRANSFER",
        "feePayer": "{token}",
        "transactionError": {{"InstructionError": [0, "Custom"]}}
    }},
    {{
        "signature": "aa04",
        "timestamp": 1700000400,
        "type": "BURN"
    }}
]"#,
        base58 = BASE58_SIGNATURE,
        token = TOKEN,
        wallet = WALLET
    )
}

/// Writes [`records_json`] into `dir` and returns its path.
pub fn write_records(dir: &Path) -> io::Result<PathBuf> {
    let path = dir.join("transactions.json");
    fs::write(&path, records_json())?;
    Ok(path)
}

/// Configuration with a low sample rate and the fixture records as source.
pub fn config_with_records(dir: &Path) -> io::Result<SymphConfig> {
    Ok(SymphConfig {
        transactions_path: Some(write_records(dir)?),
        ..test_config()
    })
}

/// Configuration with a low sample rate so renders stay fast.
pub fn test_config() -> SymphConfig {
    SymphConfig {
        sample_rate: 8000,
        ..Default::default()
    }
}

/// A swap large enough to fire both mutation rules.
pub fn loud_swap() -> Transaction {
    Transaction::builder(HEX_SIGNATURE, TransactionType::Swap)
        .value(5000.0)
        .fee(0.2)
        .build()
}
