//! Transaction lookup over enhanced-transaction exports.

use pretty_assertions::assert_eq;
use symph_spec::{
    JsonFileSource, MemorySource, TransactionSource, TransactionStatus, TransactionType,
};
use symph_tests::fixtures::{write_records, BASE58_SIGNATURE, TOKEN, WALLET};

fn file_source() -> (tempfile::TempDir, JsonFileSource) {
    let dir = tempfile::tempdir().unwrap();
    let path = write_records(dir.path()).unwrap();
    (dir, JsonFileSource::new(path))
}

#[test]
fn test_lookup_converts_record() {
    let (_dir, source) = file_source();
    let tx = source.lookup(BASE58_SIGNATURE).unwrap();

    assert_eq!(tx.tx_type, TransactionType::Swap);
    assert_eq!(tx.value, Some(2500.0));
    assert!((tx.fee - 0.000005).abs() < 1e-15);
    assert_eq!(tx.status, TransactionStatus::Success);
    assert_eq!(tx.timestamp, "2023-11-14T22:13:20+00:00");
}

#[test]
fn test_lookup_classifies_from_logs_and_errors() {
    let (_dir, source) = file_source();

    let minted = source.lookup("aa02").unwrap();
    assert_eq!(minted.tx_type, TransactionType::Mint);
    assert_eq!(minted.value, None);
    assert!((minted.fee - 0.25).abs() < 1e-12);

    let failed = source.lookup("aa03").unwrap();
    assert_eq!(failed.tx_type, TransactionType::Transfer);
    assert_eq!(failed.status, TransactionStatus::Failed);
}

#[test]
fn test_lookup_misses() {
    let (_dir, source) = file_source();
    assert!(source.lookup("ffff").is_none());
    assert!(source.lookup("").is_none());
}

#[test]
fn test_list_newest_first() {
    let (_dir, source) = file_source();
    let sigs: Vec<String> = source
        .list(TOKEN, 10)
        .into_iter()
        .map(|tx| tx.signature)
        .collect();
    assert_eq!(sigs, ["aa02", "aa03", BASE58_SIGNATURE]);
}

#[test]
fn test_list_matches_transfer_accounts() {
    let (_dir, source) = file_source();
    let txs = source.list(WALLET, 10);
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].signature, BASE58_SIGNATURE);
}

#[test]
fn test_list_respects_limit() {
    let (_dir, source) = file_source();
    assert_eq!(source.list(TOKEN, 1).len(), 1);
    assert!(source.list(TOKEN, 0).is_empty());
}

#[test]
fn test_invalid_address_lists_nothing() {
    let (_dir, source) = file_source();
    assert!(source.list("not-an-address", 10).is_empty());
    assert!(source.list("", 10).is_empty());
}

#[test]
fn test_missing_file_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let source = JsonFileSource::new(dir.path().join("absent.json"));
    assert!(source.lookup(BASE58_SIGNATURE).is_none());
    assert!(source.list(TOKEN, 10).is_empty());
    assert!(source.load().is_err());
}

#[test]
fn test_memory_source_agrees_with_file() {
    let (_dir, file) = file_source();
    let memory = MemorySource::new(file.load().unwrap());
    assert_eq!(memory.len(), 4);
    assert_eq!(memory.lookup("aa02"), file.lookup("aa02"));
    assert_eq!(memory.list(TOKEN, 2), file.list(TOKEN, 2));
}
