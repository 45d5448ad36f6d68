// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! External IPv4 resolution (spec §4.3 step 1), grounded 1:1 on
//! `sync_cloudflare.py::get_external_ip`: a prioritized fallback list of
//! IP-echo services, 5 s timeout per request, dotted-quad validation.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use tracing::warn;

use crate::error::{ReconcileError, Result};

/// Prioritized IP-echo services, in the order the reference script tries them.
pub const DEFAULT_IP_ECHO_SERVICES: &[&str] =
    &["https://api.ipify.org", "https://ifconfig.me", "https://ipinfo.io/ip"];

const IP_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static DOTTED_QUAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+\.\d+$").expect("constant regex pattern is valid"));

/// Whether `candidate` is a bare dotted-quad (no validation of octet ranges,
/// matching the reference script's regex exactly).
pub fn is_dotted_quad(candidate: &str) -> bool {
    DOTTED_QUAD.is_match(candidate)
}

/// Try each service in order, accepting the first valid dotted-quad response.
pub async fn resolve_external_ip(client: &reqwest::Client, services: &[&str]) -> Result<String> {
    for service in services {
        match client.get(*service).timeout(IP_LOOKUP_TIMEOUT).send().await {
            Ok(response) if response.status().is_success() => match response.text().await {
                Ok(body) => {
                    let candidate = body.trim();
                    if is_dotted_quad(candidate) {
                        return Ok(candidate.to_string());
                    }
                    warn!(service = *service, body = candidate, "ip echo returned a non dotted-quad body");
                }
                Err(err) => warn!(service = *service, error = %err, "failed to read ip echo response body"),
            },
            Ok(response) => warn!(service = *service, status = %response.status(), "ip echo returned non-success"),
            Err(err) => warn!(service = *service, error = %err, "failed to reach ip echo service"),
        }
    }
    Err(ReconcileError::ExternalIpUnavailable)
}

#[cfg(test)]
#[path = "ip_lookup_tests.rs"]
mod tests;
