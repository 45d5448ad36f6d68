// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The worker loop: `Run(workerId, stageAdapter)` (spec §4.1). Pulls a job,
//! claims it, dispatches to the stage adapter, records the terminal state.

use oj_adapters::StageAdapter;
use oj_core::{Clock, JobId, JobType};
use oj_kv::QueueClient;
use oj_storage::JobStore;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::progress_sink::ProgressSinkFactory;
use crate::queue_scan::worker_scan_keys;

/// Tuning knobs for a [`Worker`] instance.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Job types this worker instance accepts, scanned outer-by-type,
    /// inner-by-priority (spec §4.1).
    pub job_types: Vec<JobType>,
    /// Blocking-pop timeout per scan iteration (spec §4.1: "≈1 s").
    pub pop_timeout: Duration,
    /// How long a claimed job's lease lasts before the sweeper may consider
    /// it stranded (spec §4.1 Failure model: "e.g., 2x the stage's P99").
    pub lease_duration: chrono::Duration,
}

impl WorkerConfig {
    pub fn new(job_types: Vec<JobType>, lease_duration: chrono::Duration) -> Self {
        Self { job_types, pop_timeout: Duration::from_secs(1), lease_duration }
    }
}

/// A single worker instance driving one [`StageAdapter`].
pub struct Worker<C: Clock> {
    worker_id: String,
    config: WorkerConfig,
    store: Arc<dyn JobStore>,
    queue: QueueClient,
    progress: Arc<dyn ProgressSinkFactory>,
    adapter: Arc<dyn StageAdapter>,
    clock: C,
}

impl<C: Clock> Worker<C> {
    pub fn new(
        worker_id: impl Into<String>,
        config: WorkerConfig,
        store: Arc<dyn JobStore>,
        queue: QueueClient,
        progress: Arc<dyn ProgressSinkFactory>,
        adapter: Arc<dyn StageAdapter>,
        clock: C,
    ) -> Self {
        Self { worker_id: worker_id.into(), config, store, queue, progress, adapter, clock }
    }

    /// Run the worker loop until `shutdown` is cancelled.
    pub async fn run(&self, shutdown: CancellationToken) {
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    info!(worker_id = %self.worker_id, "worker shutting down");
                    return;
                }
                _ = self.run_once() => {}
            }
        }
    }

    /// Perform one scan-pop-claim-dispatch cycle. Returns whether or not a
    /// job was found or claimed — discarding a lost pop is normal operation
    /// (spec §4.1), not a failure.
    pub async fn run_once(&self) {
        let keys = worker_scan_keys(&self.config.job_types);
        let popped = match self.queue.blocking_pop(&keys, self.config.pop_timeout).await {
            Ok(popped) => popped,
            Err(err) => {
                warn!(worker_id = %self.worker_id, error = %err, "queue pop failed");
                return;
            }
        };

        let Some(job_id) = popped else {
            return;
        };

        self.claim_and_dispatch(job_id).await;
    }

    /// Claim `job_id`, dispatch it to the adapter if claimed, and record the
    /// terminal state. Split out from [`Self::run_once`] so the claim/
    /// dispatch/terminal-write protocol is unit-testable without a live
    /// queue backing the pop.
    pub async fn claim_and_dispatch(&self, job_id: JobId) {
        let now = epoch_to_utc(self.clock.epoch_ms());
        let lease_expires_at = now + self.config.lease_duration;
        let claimed = match self.store.claim(job_id, &self.worker_id, now, lease_expires_at).await
        {
            Ok(claimed) => claimed,
            Err(err) => {
                warn!(worker_id = %self.worker_id, job_id = %job_id, error = %err, "claim failed");
                return;
            }
        };

        if !claimed {
            // Row missing, already running, or cancelled: discard silently
            // (spec §4.1 claim protocol).
            return;
        }

        let job = match self.store.get(job_id).await {
            Ok(Some(job)) => job,
            Ok(None) => {
                warn!(worker_id = %self.worker_id, job_id = %job_id, "claimed job vanished");
                return;
            }
            Err(err) => {
                warn!(worker_id = %self.worker_id, job_id = %job_id, error = %err, "fetch after claim failed");
                return;
            }
        };

        info!(worker_id = %self.worker_id, job_id = %job_id, job_type = %job.job_type, "job claimed, dispatching");

        let sink = self.progress.for_job(job_id);
        let result = self.adapter.process(job.input_data, sink.as_ref()).await;

        let now = epoch_to_utc(self.clock.epoch_ms());
        match result {
            Ok(output) => match self.store.complete(job_id, &self.worker_id, now, output).await {
                Ok(true) => info!(worker_id = %self.worker_id, job_id = %job_id, "job completed"),
                Ok(false) => {
                    warn!(worker_id = %self.worker_id, job_id = %job_id, "completion discarded: job no longer ours")
                }
                Err(err) => {
                    warn!(worker_id = %self.worker_id, job_id = %job_id, error = %err, "completion write failed")
                }
            },
            Err(err) => {
                let message = err.to_string();
                match self.store.fail(job_id, &self.worker_id, now, message).await {
                    Ok(true) => warn!(worker_id = %self.worker_id, job_id = %job_id, error = %err, "job failed"),
                    Ok(false) => {
                        warn!(worker_id = %self.worker_id, job_id = %job_id, "failure write discarded: job no longer ours")
                    }
                    Err(store_err) => {
                        warn!(worker_id = %self.worker_id, job_id = %job_id, error = %store_err, "failure write failed")
                    }
                }
            }
        }
    }
}

fn epoch_to_utc(epoch_ms: u64) -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::from_timestamp_millis(epoch_ms as i64).unwrap_or_else(chrono::Utc::now)
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod tests;
