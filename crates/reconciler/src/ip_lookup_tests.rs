// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn accepts_dotted_quad() {
    assert!(is_dotted_quad("203.0.113.5"));
}

#[test]
fn rejects_non_numeric_body() {
    assert!(!is_dotted_quad("not an ip"));
    assert!(!is_dotted_quad(""));
    assert!(!is_dotted_quad("::1"));
}

#[tokio::test]
async fn resolve_external_ip_errors_when_no_service_reachable() {
    let client = reqwest::Client::new();
    // Port 0 on localhost never accepts connections.
    let result = resolve_external_ip(&client, &["http://127.0.0.1:0/"]).await;
    assert!(matches!(result, Err(ReconcileError::ExternalIpUnavailable)));
}
