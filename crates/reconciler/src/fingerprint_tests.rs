// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn fingerprint_is_deterministic_and_sensitive_to_content() {
    let a = fingerprint(b"hello");
    let b = fingerprint(b"hello");
    let c = fingerprint(b"world");
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.len(), 64);
}

#[tokio::test]
async fn fingerprint_round_trips_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fingerprint");

    assert_eq!(read_fingerprint(&path).await, None);

    write_fingerprint(&path, "abc123").await.unwrap();
    assert_eq!(read_fingerprint(&path).await, Some("abc123".to_string()));
}

#[tokio::test]
async fn health_timestamp_is_written_as_rfc3339() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("health");
    let now = chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap();

    touch_health_timestamp(&path, now).await.unwrap();

    let written = tokio::fs::read_to_string(&path).await.unwrap();
    assert_eq!(written, now.to_rfc3339());
}
