// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{BlobStore, FakeBlobStore};

#[tokio::test]
async fn put_then_get_round_trips() {
    let store = FakeBlobStore::new();
    store.put("transcripts/ep-1/whisperx.json", b"hello".to_vec()).await.unwrap();
    let data = store.get("transcripts/ep-1/whisperx.json").await.unwrap();
    assert_eq!(data, b"hello");
}

#[tokio::test]
async fn get_missing_key_errors() {
    let store = FakeBlobStore::new();
    assert!(store.get("missing").await.is_err());
}

#[tokio::test]
async fn put_overwrites_idempotently() {
    let store = FakeBlobStore::new();
    store.put("k", b"first".to_vec()).await.unwrap();
    store.put("k", b"second".to_vec()).await.unwrap();
    assert_eq!(store.get("k").await.unwrap(), b"second");
    assert!(store.contains("k"));
}
