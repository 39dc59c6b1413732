//! Ingest and aggregation behavior against the in-memory and filesystem
//! stores.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use bytes::Bytes;

use promrelay_core::{MetricFile, AGGREGATE_FILE_NAME};
use promrelay_gateway::store::{FsStore, MemoryStore, ObjectStore};
use promrelay_gateway::{aggregate, ingest};

const FILE_A: &[u8] =
    br#"{"name":"a","metrics":[{"name":"up","type":"gauge","tags":{},"value":"1"}]}"#;
const FILE_B: &[u8] =
    br#"{"name":"b","metrics":[{"name":"down","type":"gauge","tags":{},"value":"0"}]}"#;

#[tokio::test]
async fn ingest_stores_canonical_bytes_under_file_name() {
    let store = MemoryStore::new();
    let key = ingest::ingest(&store, FILE_A).await.expect("ingest");
    assert_eq!(key, "a");

    assert_eq!(store.list().await.unwrap(), vec!["a".to_string()]);
    let stored = store.get("a").await.unwrap();
    let expected = MetricFile::decode(FILE_A).unwrap().encode().unwrap();
    assert_eq!(stored.as_ref(), expected.as_slice());
}

#[tokio::test]
async fn ingest_overwrites_existing_key_silently() {
    let store = MemoryStore::new();
    ingest::ingest(&store, FILE_A).await.unwrap();
    let replacement = br#"{"name":"a","metrics":[]}"#;
    ingest::ingest(&store, replacement).await.unwrap();

    assert_eq!(store.list().await.unwrap().len(), 1);
    let mf = MetricFile::decode(&store.get("a").await.unwrap()).unwrap();
    assert!(mf.metrics.is_empty());
}

#[tokio::test]
async fn unnamed_submission_is_never_stored() {
    let store = MemoryStore::new();
    let body = br#"{"name":"","metrics":[{"name":"up","type":"gauge","tags":{},"value":"1"}]}"#;
    let err = ingest::ingest(&store, body).await.expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "VALIDATION_FAILED");
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn invalid_member_blocks_the_whole_submission() {
    let store = MemoryStore::new();
    let body = br#"{"name":"a","metrics":[{"name":"up","type":"gauge","tags":{},"value":"1.5"}]}"#;
    ingest::ingest(&store, body).await.expect_err("must fail");
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn base64_submissions_decode_before_the_core() {
    let store = MemoryStore::new();
    let encoded = BASE64.encode(FILE_A);
    let raw = ingest::decode_submission(encoded.as_bytes(), true).expect("decode");
    ingest::ingest(&store, &raw).await.expect("ingest");
    assert_eq!(store.list().await.unwrap(), vec!["a".to_string()]);

    let err = ingest::decode_submission(b"not base64!!!", true).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "DECODE_FAILED");
}

#[tokio::test]
async fn aggregation_concatenates_in_listing_order() {
    let store = MemoryStore::new();
    store.put("a", Bytes::from_static(FILE_A)).await.unwrap();
    store.put("b", Bytes::from_static(FILE_B)).await.unwrap();

    let all = aggregate::aggregate_all(&store).await.expect("aggregate");
    assert_eq!(all.name, AGGREGATE_FILE_NAME);
    assert_eq!(
        all.render(),
        "# TYPE up gauge\nup 1\n\n# TYPE down gauge\ndown 0\n\n"
    );
}

#[tokio::test]
async fn empty_bucket_aggregates_to_empty_document() {
    let store = MemoryStore::new();
    let all = aggregate::aggregate_all(&store).await.unwrap();
    assert_eq!(all.name, AGGREGATE_FILE_NAME);
    assert_eq!(all.render(), "");
}

#[tokio::test]
async fn one_undecodable_object_poisons_the_read() {
    let store = MemoryStore::new();
    store.put("a", Bytes::from_static(FILE_A)).await.unwrap();
    store.put("b", Bytes::from_static(b"{broken")).await.unwrap();

    let err = aggregate::aggregate_all(&store).await.expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "DECODE_FAILED");
}

#[tokio::test]
async fn validation_failure_names_the_offending_object() {
    let store = MemoryStore::new();
    store.put("a", Bytes::from_static(FILE_A)).await.unwrap();
    let bad = br#"{"name":"b","metrics":[{"name":"bad metric","type":"gauge","tags":{},"value":"1"}]}"#;
    store.put("b", Bytes::from_static(bad)).await.unwrap();

    let err = aggregate::aggregate_all(&store).await.expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "VALIDATION_FAILED");
    assert!(err.to_string().ends_with(": b"));
}

#[tokio::test]
async fn missing_object_surfaces_the_fetch_error() {
    let store = MemoryStore::new();
    let err = aggregate::aggregate(&store, vec!["nope".to_string()])
        .await
        .expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "STORE_FAILED");
}

#[tokio::test]
async fn fs_store_round_trips_and_lists_sorted() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsStore::new(dir.path());

    store.put("b", Bytes::from_static(FILE_B)).await.unwrap();
    store.put("a", Bytes::from_static(FILE_A)).await.unwrap();

    assert_eq!(
        store.list().await.unwrap(),
        vec!["a".to_string(), "b".to_string()]
    );
    assert_eq!(store.get("a").await.unwrap().as_ref(), FILE_A);
}

#[tokio::test]
async fn fs_store_refuses_path_like_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsStore::new(dir.path());

    let err = store
        .put("host/web-1", Bytes::from_static(FILE_A))
        .await
        .expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "STORE_FAILED");
}

#[tokio::test]
async fn fs_store_treats_missing_root_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsStore::new(dir.path().join("never-created"));
    assert!(store.list().await.unwrap().is_empty());
}
