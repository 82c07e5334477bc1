//! Transaction type classification from provider labels and program logs.

use crate::transaction::TransactionType;

/// Maps a provider type label (`"SWAP"`, `"TOKEN_MINT"`, `"NFT_SALE"`, ...)
/// to a transaction type.
///
/// Returns `None` for empty or `UNKNOWN` labels and for labels that match no
/// rule, so the caller can fall back to [`classify_logs`].
pub fn classify_type_label(label: &str) -> Option<TransactionType> {
    let upper = label.trim().to_ascii_uppercase();
    if upper.is_empty() || upper == "UNKNOWN" {
        return None;
    }
    if upper.contains("NFT") {
        return Some(TransactionType::Nft);
    }
    if upper.contains("MINT") {
        return Some(TransactionType::Mint);
    }
    if upper.contains("BURN") {
        return Some(TransactionType::Burn);
    }
    if upper.contains("SWAP") {
        return Some(TransactionType::Swap);
    }
    if upper.contains("TRANSFER") {
        return Some(TransactionType::Transfer);
    }
    const DEFI_MARKERS: [&str; 6] = ["DEPOSIT", "WITHDRAW", "STAKE", "LOAN", "BORROW", "REPAY"];
    if DEFI_MARKERS.iter().any(|m| upper.contains(m)) {
        return Some(TransactionType::Defi);
    }
    None
}

/// Classifies a transaction by scanning its program log lines.
///
/// Rules are checked in order and the first hit wins: mint initialization,
/// burn, swap, transfer, NFT, then deposit or withdraw as DeFi.
///
/// # Example
/// ```
/// use symph_spec::source::classify_logs;
/// use symph_spec::TransactionType;
///
/// let logs = vec!["Program log: Instruction: Transfer".to_string()];
/// assert_eq!(classify_logs(&logs), Some(TransactionType::Transfer));
/// assert_eq!(classify_logs(&[]), None);
/// ```
pub fn classify_logs(logs: &[String]) -> Option<TransactionType> {
    if logs.is_empty() {
        return None;
    }
    let joined = logs.join(" ");
    let has = |needle: &str| joined.contains(needle);

    if has("Initialize mint") || has("InitializeMint") {
        Some(TransactionType::Mint)
    } else if has("Burn") {
        Some(TransactionType::Burn)
    } else if has("Swap") {
        Some(TransactionType::Swap)
    } else if has("Transfer") {
        Some(TransactionType::Transfer)
    } else if has("NFT") {
        Some(TransactionType::Nft)
    } else if has("Deposit") || has("Withdraw") {
        Some(TransactionType::Defi)
    } else {
        None
    }
}
