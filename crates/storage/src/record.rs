// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The relational row shape for a [`oj_core::Job`].

use crate::error::JobStoreError;
use chrono::{DateTime, Utc};
use oj_core::{Job, JobId, JobInput, JobOutput, JobStatus, JobType, Priority};
use uuid::Uuid;

/// Row shape of the `jobs` table.
///
/// Mirrors [`Job`] field-for-field plus `lease_expires_at`, which spec §4.1's
/// Failure model requires implementers to expose so a recovery sweeper can
/// find stranded `RUNNING` rows without guessing a lease window itself.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct JobRecord {
    pub id: Uuid,
    pub job_type: String,
    pub priority: String,
    pub input_data: serde_json::Value,
    pub status: String,
    pub progress: i32,
    pub worker_id: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub output_data: Option<serde_json::Value>,
    pub error_message: Option<String>,
    pub lease_expires_at: Option<DateTime<Utc>>,
}

impl JobRecord {
    pub fn from_job(job: &Job, lease_expires_at: Option<DateTime<Utc>>) -> Result<Self, JobStoreError> {
        Ok(Self {
            id: job.id.as_uuid(),
            job_type: job.job_type.to_string(),
            priority: job.priority.to_string(),
            input_data: serde_json::to_value(&job.input_data)?,
            status: job.status.to_string(),
            progress: job.progress as i32,
            worker_id: job.worker_id.clone(),
            started_at: job.started_at,
            completed_at: job.completed_at,
            output_data: job.output_data.as_ref().map(serde_json::to_value).transpose()?,
            error_message: job.error_message.clone(),
            lease_expires_at,
        })
    }

    pub fn into_job(self) -> Result<Job, JobStoreError> {
        let job_type: JobType = self.job_type.parse()?;
        let priority: Priority = self.priority.parse()?;
        let status: JobStatus = self.status.parse()?;
        let input_data: JobInput = serde_json::from_value(self.input_data)?;
        let output_data: Option<JobOutput> =
            self.output_data.map(serde_json::from_value).transpose()?;
        Ok(Job {
            id: JobId::from_uuid(self.id),
            job_type,
            priority,
            input_data,
            status,
            progress: self.progress.clamp(0, 100) as u8,
            worker_id: self.worker_id,
            started_at: self.started_at,
            completed_at: self.completed_at,
            output_data,
            error_message: self.error_message,
        })
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
