// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Priority-class FIFO queues, keyed `queue:<JOB_TYPE>:<PRIORITY>` (spec §6.4).

use crate::client::KvClient;
use crate::error::Result;
use oj_core::JobId;
use redis::AsyncCommands;
use std::time::Duration;
use tracing::debug;

/// Queue operations over the job-id lists.
///
/// Job-ids are pushed on the left and popped on the right, giving FIFO order
/// within a single `(type, priority)` queue.
#[derive(Clone)]
pub struct QueueClient {
    kv: KvClient,
}

impl QueueClient {
    pub fn new(kv: KvClient) -> Self {
        Self { kv }
    }

    /// Append `id` to `queue_key`.
    pub async fn push(&self, queue_key: &str, id: JobId) -> Result<()> {
        let mut conn = self.kv.connection().await?;
        let key = self.kv.key(queue_key);
        conn.lpush(&key, id.to_string()).await?;
        debug!(queue = %key, job_id = %id, "job pushed to queue");
        Ok(())
    }

    /// Blocking pop across `queue_keys` in strict priority order, waiting up
    /// to `timeout`. `BRPOP` checks each key in the order given and returns
    /// from the first with an entry, which is exactly the "priority class
    /// dominance within a worker type" scan spec §4.1 describes — no need to
    /// poll each queue key individually.
    ///
    /// Returns `None` if every queue was empty for the whole timeout.
    pub async fn blocking_pop(
        &self,
        queue_keys: &[String],
        timeout: Duration,
    ) -> Result<Option<JobId>> {
        let mut conn = self.kv.connection().await?;
        let namespaced: Vec<String> = queue_keys.iter().map(|k| self.kv.key(k)).collect();
        let result: Option<(String, String)> =
            conn.brpop(&namespaced, timeout.as_secs_f64()).await?;
        Ok(result.and_then(|(_, id)| uuid::Uuid::parse_str(&id).ok().map(JobId::from_uuid)))
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
