// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sqlx`-backed [`JobStore`] implementation against a Postgres `jobs` table.

use crate::error::Result;
use crate::record::JobRecord;
use crate::store::JobStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use oj_core::{Job, JobId, JobOutput, JobStatus};
use sqlx::PgPool;
use tracing::{info, warn};

/// `JobStore` backed by a Postgres connection pool.
///
/// Expects a `jobs` table shaped like [`JobRecord`]: `id uuid primary key`,
/// `job_type`/`priority`/`status text`, `input_data`/`output_data jsonb`,
/// `progress int`, `worker_id text`, `started_at`/`completed_at`/
/// `lease_expires_at timestamptz`, `error_message text`.
pub struct PostgresJobStore {
    pool: PgPool,
}

impl PostgresJobStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for PostgresJobStore {
    async fn enqueue(&self, job: &Job) -> Result<()> {
        let record = JobRecord::from_job(job, None)?;
        sqlx::query(
            r#"
            INSERT INTO jobs (
                id, job_type, priority, input_data, status, progress,
                worker_id, started_at, completed_at, output_data, error_message,
                lease_expires_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(record.id)
        .bind(&record.job_type)
        .bind(&record.priority)
        .bind(&record.input_data)
        .bind(&record.status)
        .bind(record.progress)
        .bind(&record.worker_id)
        .bind(record.started_at)
        .bind(record.completed_at)
        .bind(&record.output_data)
        .bind(&record.error_message)
        .bind(record.lease_expires_at)
        .execute(&self.pool)
        .await?;

        info!(job_id = %job.id, job_type = %job.job_type, priority = %job.priority, "job enqueued");
        Ok(())
    }

    async fn get(&self, id: JobId) -> Result<Option<Job>> {
        let row = sqlx::query_as::<_, JobRecord>(
            r#"
            SELECT id, job_type, priority, input_data, status, progress,
                   worker_id, started_at, completed_at, output_data, error_message,
                   lease_expires_at
            FROM jobs WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(JobRecord::into_job).transpose()
    }

    async fn claim(
        &self,
        id: JobId,
        worker_id: &str,
        now: DateTime<Utc>,
        lease_expires_at: DateTime<Utc>,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE jobs
            SET status = 'RUNNING', started_at = $1, worker_id = $2, lease_expires_at = $3
            WHERE id = $4 AND status = 'QUEUED'
            "#,
        )
        .bind(now)
        .bind(worker_id)
        .bind(lease_expires_at)
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await?;

        let claimed = result.rows_affected() == 1;
        if claimed {
            info!(job_id = %id, worker_id, "job claimed");
        }
        Ok(claimed)
    }

    async fn complete(
        &self,
        id: JobId,
        worker_id: &str,
        now: DateTime<Utc>,
        output: JobOutput,
    ) -> Result<bool> {
        let output_data = serde_json::to_value(&output)?;
        let result = sqlx::query(
            r#"
            UPDATE jobs
            SET status = 'COMPLETED', progress = 100, completed_at = $1, output_data = $2
            WHERE id = $3 AND status = 'RUNNING' AND worker_id = $4
            "#,
        )
        .bind(now)
        .bind(output_data)
        .bind(id.as_uuid())
        .bind(worker_id)
        .execute(&self.pool)
        .await?;

        let applied = result.rows_affected() == 1;
        if applied {
            info!(job_id = %id, worker_id, "job completed");
        } else {
            warn!(job_id = %id, worker_id, "completion write discarded: job no longer RUNNING under this worker");
        }
        Ok(applied)
    }

    async fn fail(
        &self,
        id: JobId,
        worker_id: &str,
        now: DateTime<Utc>,
        error_message: String,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE jobs
            SET status = 'FAILED', completed_at = $1, error_message = $2
            WHERE id = $3 AND status = 'RUNNING' AND worker_id = $4
            "#,
        )
        .bind(now)
        .bind(&error_message)
        .bind(id.as_uuid())
        .bind(worker_id)
        .execute(&self.pool)
        .await?;

        let applied = result.rows_affected() == 1;
        if applied {
            warn!(job_id = %id, worker_id, error = %error_message, "job failed");
        }
        Ok(applied)
    }

    async fn cancel(&self, id: JobId) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE jobs SET status = 'CANCELLED'
            WHERE id = $1 AND status = 'QUEUED'
            "#,
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn sweep_stale(&self, now: DateTime<Utc>) -> Result<Vec<JobId>> {
        let rows = sqlx::query_as::<_, (uuid::Uuid,)>(
            r#"
            UPDATE jobs
            SET status = 'FAILED', completed_at = $1,
                error_message = 'lease expired: presumed worker crash'
            WHERE status = 'RUNNING' AND lease_expires_at < $1
            RETURNING id
            "#,
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await?;

        let ids: Vec<JobId> = rows.into_iter().map(|(id,)| JobId::from_uuid(id)).collect();
        for id in &ids {
            warn!(job_id = %id, status = %JobStatus::Failed, "stale lease swept");
        }
        Ok(ids)
    }
}
