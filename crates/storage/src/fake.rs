// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory [`JobStore`] fake for tests that don't want a real Postgres instance.

use crate::error::Result;
use crate::store::JobStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use oj_core::{Job, JobId, JobOutput, JobStatus};
use parking_lot::Mutex;
use std::collections::HashMap;

#[derive(Default)]
struct Inner {
    jobs: HashMap<JobId, (Job, Option<DateTime<Utc>>)>,
}

/// An in-memory [`JobStore`] applying the same conditional-write rules as
/// [`crate::postgres::PostgresJobStore`], for scheduler tests.
#[derive(Default)]
pub struct FakeJobStore {
    inner: Mutex<Inner>,
}

impl FakeJobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobStore for FakeJobStore {
    async fn enqueue(&self, job: &Job) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.jobs.insert(job.id, (job.clone(), None));
        Ok(())
    }

    async fn get(&self, id: JobId) -> Result<Option<Job>> {
        let inner = self.inner.lock();
        Ok(inner.jobs.get(&id).map(|(job, _)| job.clone()))
    }

    async fn claim(
        &self,
        id: JobId,
        worker_id: &str,
        now: DateTime<Utc>,
        lease_expires_at: DateTime<Utc>,
    ) -> Result<bool> {
        let mut inner = self.inner.lock();
        let Some((job, lease)) = inner.jobs.get_mut(&id) else {
            return Ok(false);
        };
        if job.status != JobStatus::Queued {
            return Ok(false);
        }
        job.status = JobStatus::Running;
        job.worker_id = Some(worker_id.to_string());
        job.started_at = Some(now);
        *lease = Some(lease_expires_at);
        Ok(true)
    }

    async fn complete(
        &self,
        id: JobId,
        worker_id: &str,
        now: DateTime<Utc>,
        output: JobOutput,
    ) -> Result<bool> {
        let mut inner = self.inner.lock();
        let Some((job, _)) = inner.jobs.get_mut(&id) else {
            return Ok(false);
        };
        if job.status != JobStatus::Running || job.worker_id.as_deref() != Some(worker_id) {
            return Ok(false);
        }
        job.status = JobStatus::Completed;
        job.progress = 100;
        job.completed_at = Some(now);
        job.output_data = Some(output);
        Ok(true)
    }

    async fn fail(
        &self,
        id: JobId,
        worker_id: &str,
        now: DateTime<Utc>,
        error_message: String,
    ) -> Result<bool> {
        let mut inner = self.inner.lock();
        let Some((job, _)) = inner.jobs.get_mut(&id) else {
            return Ok(false);
        };
        if job.status != JobStatus::Running || job.worker_id.as_deref() != Some(worker_id) {
            return Ok(false);
        }
        job.status = JobStatus::Failed;
        job.completed_at = Some(now);
        job.error_message = Some(error_message);
        Ok(true)
    }

    async fn cancel(&self, id: JobId) -> Result<bool> {
        let mut inner = self.inner.lock();
        let Some((job, _)) = inner.jobs.get_mut(&id) else {
            return Ok(false);
        };
        if job.status != JobStatus::Queued {
            return Ok(false);
        }
        job.status = JobStatus::Cancelled;
        Ok(true)
    }

    async fn sweep_stale(&self, now: DateTime<Utc>) -> Result<Vec<JobId>> {
        let mut inner = self.inner.lock();
        let mut swept = Vec::new();
        for (id, (job, lease)) in inner.jobs.iter_mut() {
            if job.status != JobStatus::Running {
                continue;
            }
            if lease.is_some_and(|expiry| expiry < now) {
                job.status = JobStatus::Failed;
                job.completed_at = Some(now);
                job.error_message = Some("lease expired: presumed worker crash".to_string());
                swept.push(*id);
            }
        }
        Ok(swept)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
