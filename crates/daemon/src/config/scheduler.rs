// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use oj_core::JobType;

use super::{optional_int, optional_var, ConfigError};

/// `WORKER_ID` (optional; defaults to `worker-<hostname>-<pid>`, mirroring
/// `ASRWorker.worker_id` in `workers/asr/worker.py`) and `LEASE_SECONDS`
/// (optional; the claim lease duration, spec §4.1 Failure model).
pub struct SchedulerEnv {
    pub worker_id: String,
    pub lease_seconds: i64,
}

impl SchedulerEnv {
    pub fn from_env() -> Result<Self, ConfigError> {
        let default_worker_id =
            format!("worker-{}-{}", optional_var("HOSTNAME", "unknown"), std::process::id());
        let worker_id = optional_var("WORKER_ID", default_worker_id);
        let lease_seconds = optional_int("LEASE_SECONDS", 300)?;
        Ok(Self { worker_id, lease_seconds })
    }
}

/// The job types this binary knows how to run workers for — every
/// [`JobType`] with a concrete adapter in `oj-adapters` (spec §1's
/// out-of-scope model boundary leaves `EMBEDDING_EXTRACTION` and
/// `SPEAKER_CLUSTERING` without one).
pub const SUPPORTED_JOB_TYPES: &[JobType] =
    &[JobType::Transcription, JobType::Diarization, JobType::TtsSynthesis, JobType::TtsTraining];
