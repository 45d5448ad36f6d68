// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `Enqueue(job) -> void` (spec §4.1): insert the `Job{QUEUED}` row, then
//! push its id onto `queue:<type>:<priority>`.

use crate::error::SchedulerError;
use oj_core::Job;
use oj_kv::QueueClient;
use oj_storage::JobStore;

/// Insert `job` into the relational store and append its id to its queue.
///
/// The two writes are not wrapped in a cross-store transaction (spec §1
/// accepts best-effort at-least-once, not durable exactly-once); the row
/// write happens first so a crash between the two leaves, at worst, a
/// `QUEUED` row nothing ever pops — recoverable by a producer-side requeue —
/// rather than a popped id with no backing row.
pub async fn enqueue(
    store: &dyn JobStore,
    queue: &QueueClient,
    job: &Job,
) -> Result<(), SchedulerError> {
    store.enqueue(job).await?;
    queue.push(&job.queue_key(), job.id).await?;
    Ok(())
}

#[cfg(test)]
#[path = "enqueue_tests.rs"]
mod tests;
