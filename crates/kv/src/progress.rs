// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Advisory progress records, keyed `job:<id>` (spec §3 `ProgressRecord`).

use crate::client::KvClient;
use crate::error::Result;
use oj_core::JobId;
use redis::AsyncCommands;
use std::time::Duration;

/// TTL for a progress record: long enough to outlive any single job
/// (spec §3: "TTL: long enough to outlive any single job (e.g., 24 h)").
pub const PROGRESS_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressRecord {
    pub progress: u8,
    pub message: String,
}

/// Side-channel the worker reports progress through between claim and
/// terminal state. Writes are advisory, not durable — spec §4.1 explicitly
/// allows consumers to see missing or stale values.
#[derive(Clone)]
pub struct ProgressClient {
    kv: KvClient,
}

impl ProgressClient {
    pub fn new(kv: KvClient) -> Self {
        Self { kv }
    }

    fn key(&self, id: JobId) -> String {
        self.kv.key(&format!("job:{id}"))
    }

    /// Report `pct` (0-100) and a free-form `message` for `id`.
    pub async fn report(&self, id: JobId, pct: u8, message: impl Into<String>) -> Result<()> {
        let mut conn = self.kv.connection().await?;
        let key = self.key(id);
        let message = message.into();
        redis::pipe()
            .hset(&key, "progress", pct as i64)
            .ignore()
            .hset(&key, "message", message)
            .ignore()
            .expire(&key, PROGRESS_TTL.as_secs() as i64)
            .ignore()
            .query_async(&mut conn)
            .await?;
        Ok(())
    }

    /// Fetch the last-reported progress, if any is still live.
    pub async fn get(&self, id: JobId) -> Result<Option<ProgressRecord>> {
        let mut conn = self.kv.connection().await?;
        let key = self.key(id);
        let fields: std::collections::HashMap<String, String> = conn.hgetall(&key).await?;
        let progress = fields.get("progress").and_then(|s| s.parse::<i64>().ok());
        let message = fields.get("message").cloned();
        Ok(match (progress, message) {
            (Some(progress), Some(message)) => {
                Some(ProgressRecord { progress: progress.clamp(0, 100) as u8, message })
            }
            _ => None,
        })
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
