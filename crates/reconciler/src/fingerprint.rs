// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted reconciler state (spec §6.6): a source fingerprint and a
//! health-check timestamp, both plain files. Grounded on
//! `lightweight_check.py`'s `get_traefik_checksum`/`has_traefik_config_changed`
//! (there: `md5sum`; here: a `sha2` digest, since this crate has no shell-out
//! to a system `md5sum` binary and the original's choice of hash algorithm is
//! not itself part of the observable contract).

use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::Result;

/// Hex digest of `source`'s bytes.
pub fn fingerprint(source: &[u8]) -> String {
    let digest = Sha256::digest(source);
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}

/// Read the fingerprint persisted at `path`, if any.
pub async fn read_fingerprint(path: &Path) -> Option<String> {
    tokio::fs::read_to_string(path).await.ok().map(|s| s.trim().to_string())
}

/// Persist `value` as the fingerprint at `path`.
pub async fn write_fingerprint(path: &Path, value: &str) -> Result<()> {
    tokio::fs::write(path, value).await?;
    Ok(())
}

/// Touch the health-timestamp file with the current time.
pub async fn touch_health_timestamp(path: &Path, now: chrono::DateTime<chrono::Utc>) -> Result<()> {
    tokio::fs::write(path, now.to_rfc3339()).await?;
    Ok(())
}

#[cfg(test)]
#[path = "fingerprint_tests.rs"]
mod tests;
