// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hostname extraction from a Traefik dynamic-configuration document (spec
//! §4.3 "Declarative extraction"), grounded 1:1 on
//! `sync_cloudflare.py::extract_hostnames`: load `http.routers.*.rule`, then
//! regex out every `Host(\`...\`)` match.

use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::Value;

use crate::error::{ReconcileError, Result};

// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static HOST_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Host\(`([^`]+)`\)").expect("constant regex pattern is valid"));

/// Parse `config` (a Traefik dynamic-configuration YAML document) and
/// collect every hostname named inside a `Host(\`...\`)` router rule.
/// Duplicates are tolerated; the result is lower-cased.
pub fn extract_hostnames(config: &str) -> Result<Vec<String>> {
    let parsed: Value = serde_yaml::from_str(config).map_err(ReconcileError::ConfigParse)?;

    let mut hostnames = Vec::new();
    let routers = parsed
        .get("http")
        .and_then(|http| http.get("routers"))
        .and_then(Value::as_mapping);

    let Some(routers) = routers else {
        return Ok(hostnames);
    };

    for (_name, router) in routers {
        let Some(rule) = router.get("rule").and_then(Value::as_str) else {
            continue;
        };
        for capture in HOST_PATTERN.captures_iter(rule) {
            if let Some(hostname) = capture.get(1) {
                hostnames.push(hostname.as_str().to_lowercase());
            }
        }
    }

    Ok(hostnames)
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
