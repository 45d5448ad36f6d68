// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The throttled liveness tick (spec §4.3 "Throttled tick"), grounded 1:1 on
//! `lightweight_check.py`: compare the source fingerprint against the
//! persisted one; if unchanged, do a cheap TCP probe to the reserved SSH
//! helper hostname instead of a full pass.

use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::warn;

use crate::proxy::reserved_hostname;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);
const SSH_PORT: u16 = 22;

/// What the liveness tick decided to do, for logging/metrics at the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LivenessOutcome {
    /// Fingerprint unchanged and the helper host is reachable: no action.
    Quiet,
    /// The source fingerprint changed since the last full pass.
    FingerprintChanged,
    /// The fingerprint matched but the helper host was unreachable.
    ProbeFailed,
}

/// Decide whether a full pass is needed, given the current and last-seen
/// fingerprints. Pure so fingerprint-comparison logic is testable without a
/// network probe.
pub fn needs_full_pass_for_fingerprint(current: &str, last_seen: Option<&str>) -> bool {
    last_seen != Some(current)
}

/// TCP-probe the reserved helper hostname on port 22 with a 5 s timeout.
pub async fn probe_reserved_host(base: &str) -> bool {
    let hostname = reserved_hostname(base);
    let addr = format!("{hostname}:{SSH_PORT}");
    match timeout(PROBE_TIMEOUT, TcpStream::connect(&addr)).await {
        Ok(Ok(_)) => true,
        Ok(Err(err)) => {
            warn!(hostname = %hostname, error = %err, "ssh connectivity probe failed");
            false
        }
        Err(_) => {
            warn!(hostname = %hostname, "ssh connectivity probe timed out");
            false
        }
    }
}

/// Decide the liveness outcome for one tick: compares fingerprints first
/// (cheap, no network), then falls back to the TCP probe only if they match.
pub async fn run_liveness_tick(base: &str, current_fingerprint: &str, last_seen: Option<&str>) -> LivenessOutcome {
    if needs_full_pass_for_fingerprint(current_fingerprint, last_seen) {
        return LivenessOutcome::FingerprintChanged;
    }
    if probe_reserved_host(base).await {
        LivenessOutcome::Quiet
    } else {
        LivenessOutcome::ProbeFailed
    }
}

#[cfg(test)]
#[path = "liveness_tests.rs"]
mod tests;
