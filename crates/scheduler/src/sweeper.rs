// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The lease-sweeper mandated by spec §4.1's Failure model: any `RUNNING`
//! job whose lease has expired with no live worker is transitioned to
//! `FAILED`. Not present in the original source; this spec requires it be
//! implementable.

use oj_core::{Clock, JobId};
use oj_storage::JobStore;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Sweep every `RUNNING` job whose lease has expired as of `now`. Returns
/// the ids that were transitioned to `FAILED`.
pub async fn sweep_stale_jobs(
    store: &dyn JobStore,
    now: chrono::DateTime<chrono::Utc>,
) -> Result<Vec<JobId>, oj_storage::JobStoreError> {
    let swept = store.sweep_stale(now).await?;
    if !swept.is_empty() {
        info!(count = swept.len(), "swept stale leases");
    }
    swept.iter().for_each(|id| info!(job_id = %id, "lease swept"));
    Ok(swept)
}

/// Runs [`sweep_stale_jobs`] on a fixed interval until cancelled.
pub struct LeaseSweeper<C: Clock> {
    store: Arc<dyn JobStore>,
    clock: C,
    interval: Duration,
}

impl<C: Clock> LeaseSweeper<C> {
    pub fn new(store: Arc<dyn JobStore>, clock: C, interval: Duration) -> Self {
        Self { store, clock, interval }
    }

    pub async fn run(&self, shutdown: CancellationToken) {
        let mut ticker = tokio::time::interval(self.interval);
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => return,
                _ = ticker.tick() => {
                    let now = chrono::DateTime::from_timestamp_millis(self.clock.epoch_ms() as i64)
                        .unwrap_or_else(chrono::Utc::now);
                    if let Err(err) = sweep_stale_jobs(self.store.as_ref(), now).await {
                        warn!(error = %err, "lease sweep failed");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "sweeper_tests.rs"]
mod tests;
