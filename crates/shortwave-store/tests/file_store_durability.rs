use std::fs;

use shortwave_core::{StoreError, UrlRecord, UrlStore};
use shortwave_store::FileStore;
use tempfile::tempdir;

fn record(id: &str, original: &str) -> UrlRecord {
    UrlRecord::new(id, original, "http://localhost:8080")
}

#[tokio::test]
async fn records_survive_a_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");

    let first = record("abc123defg", "https://example.com");
    let second = record("xyz789uvwx", "https://example.org");
    {
        let store = FileStore::open(&path).unwrap();
        store.create(first.clone()).await.unwrap();
        store.create(second.clone()).await.unwrap();
    }

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(
        reopened.find_by_id("abc123defg").await.unwrap(),
        Some(first)
    );
    assert_eq!(
        reopened.find_by_original("https://example.org").await.unwrap(),
        Some(second)
    );
}

#[tokio::test]
async fn absent_file_opens_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.find_by_id("anything").await.unwrap(), None);
}

#[tokio::test]
async fn empty_file_opens_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, "").unwrap();

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.find_by_id("anything").await.unwrap(), None);
}

#[tokio::test]
async fn whitespace_only_file_opens_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, "  \n\t\n").unwrap();

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.find_by_id("anything").await.unwrap(), None);
}

#[test]
fn malformed_file_fails_to_open() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, "{ this is not json").unwrap();

    let err = FileStore::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::CorruptStore(_)));
}

#[test]
fn file_with_duplicate_ids_fails_to_open() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");

    let records = vec![
        record("abc", "https://example.com"),
        record("abc", "https://example.org"),
    ];
    fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();

    let err = FileStore::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::CorruptStore(_)));
}

#[tokio::test]
async fn file_written_by_hand_is_readable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");
    fs::write(
        &path,
        r#"[{"id": "abc", "original": "https://example.com", "short": "http://localhost:8080/abc"}]"#,
    )
    .unwrap();

    let store = FileStore::open(&path).unwrap();
    let found = store.find_by_id("abc").await.unwrap().unwrap();
    assert_eq!(found.original, "https://example.com");
    assert_eq!(found.short, "http://localhost:8080/abc");
}
