// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn reserved_hostname_is_always_unproxied() {
    assert!(!should_proxy("ssh-3afb6505.example.com", "example.com"));
}

#[test]
fn dash_d_suffix_is_unproxied() {
    assert!(!should_proxy("internal-d.example.com", "example.com"));
}

#[test]
fn ordinary_hostname_is_proxied() {
    assert!(should_proxy("app.example.com", "example.com"));
}

#[test]
fn reserved_hostname_formats_with_base() {
    assert_eq!(reserved_hostname("example.com"), "ssh-3afb6505.example.com");
}
