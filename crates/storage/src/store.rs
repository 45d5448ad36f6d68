// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The [`JobStore`] trait: the relational half of the claim/terminal discipline.

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use oj_core::{Job, JobId, JobOutput};

/// Relational storage for [`Job`] rows.
///
/// Implementations must honor the conditional-write discipline from spec
/// §4.1: a claim only succeeds against a `QUEUED` row, and a terminal write
/// only succeeds against a `RUNNING` row still held by the claiming worker.
/// This is what makes enqueue/pop pairs idempotent under duplicate delivery
/// and keeps a sweeper from clobbering a legitimate completion racing it.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Insert a freshly-created `QUEUED` job row.
    async fn enqueue(&self, job: &Job) -> Result<()>;

    /// Fetch a job by id, if it exists.
    async fn get(&self, id: JobId) -> Result<Option<Job>>;

    /// Attempt to claim a `QUEUED` job for `worker_id`.
    ///
    /// Returns `true` iff exactly one row transitioned `QUEUED -> RUNNING`.
    /// `false` means the row was missing, already running, or cancelled —
    /// the caller must discard the pop silently rather than treat it as an
    /// error.
    async fn claim(
        &self,
        id: JobId,
        worker_id: &str,
        now: DateTime<Utc>,
        lease_expires_at: DateTime<Utc>,
    ) -> Result<bool>;

    /// Record successful completion. Only applies to a `RUNNING` row still
    /// held by `worker_id`; returns `true` iff the write applied.
    async fn complete(
        &self,
        id: JobId,
        worker_id: &str,
        now: DateTime<Utc>,
        output: JobOutput,
    ) -> Result<bool>;

    /// Record failure. Only applies to a `RUNNING` row still held by
    /// `worker_id`; returns `true` iff the write applied.
    async fn fail(
        &self,
        id: JobId,
        worker_id: &str,
        now: DateTime<Utc>,
        error_message: String,
    ) -> Result<bool>;

    /// Cancel a job. Only applies while the job is still `QUEUED`; a running
    /// job must finish (or be lease-swept) before it can be considered
    /// terminated. Returns `true` iff the write applied.
    async fn cancel(&self, id: JobId) -> Result<bool>;

    /// Find every `RUNNING` job whose lease has expired as of `now` and
    /// transition each to `FAILED` with a lease-expiry message. Guarded by
    /// `status = 'RUNNING'` so a sweep racing a slow-but-alive worker's own
    /// terminal write can still only ever affect a row still stuck `RUNNING`.
    /// Returns the ids that were swept.
    async fn sweep_stale(&self, now: DateTime<Utc>) -> Result<Vec<JobId>>;
}
