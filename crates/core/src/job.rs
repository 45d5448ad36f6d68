// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job identifier, stage payloads, and the job state machine.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a job instance.
///
/// Unlike most IDs in this workspace, `JobId` wraps a [`Uuid`] directly
/// rather than the nanoid-based [`crate::id::IdBuf`] scheme, since producers
/// outside this crate (out of scope — see spec §1) mint job ids themselves
/// and are expected to hand in standard UUIDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for JobId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// Job type. Covers every stage named in spec §3; the two stages with no
/// payload schema given in spec §6.2 (`EMBEDDING_EXTRACTION`,
/// `SPEAKER_CLUSTERING`) carry an opaque [`JobInput::Opaque`] payload instead
/// of a typed variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    Transcription,
    Diarization,
    EmbeddingExtraction,
    SpeakerClustering,
    TtsSynthesis,
    TtsTraining,
}

crate::simple_display! {
    JobType {
        Transcription => "TRANSCRIPTION",
        Diarization => "DIARIZATION",
        EmbeddingExtraction => "EMBEDDING_EXTRACTION",
        SpeakerClustering => "SPEAKER_CLUSTERING",
        TtsSynthesis => "TTS_SYNTHESIS",
        TtsTraining => "TTS_TRAINING",
    }
}

impl std::str::FromStr for JobType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TRANSCRIPTION" => Ok(JobType::Transcription),
            "DIARIZATION" => Ok(JobType::Diarization),
            "EMBEDDING_EXTRACTION" => Ok(JobType::EmbeddingExtraction),
            "SPEAKER_CLUSTERING" => Ok(JobType::SpeakerClustering),
            "TTS_SYNTHESIS" => Ok(JobType::TtsSynthesis),
            "TTS_TRAINING" => Ok(JobType::TtsTraining),
            other => Err(ParseEnumError::new("JobType", other)),
        }
    }
}

/// Priority class. Ordering matches scan order in spec §4.1:
/// `URGENT, HIGH, NORMAL, LOW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Urgent,
    High,
    Normal,
    Low,
}

impl Priority {
    /// All priority classes in strict scan order (highest first).
    pub const ALL: [Priority; 4] =
        [Priority::Urgent, Priority::High, Priority::Normal, Priority::Low];
}

crate::simple_display! {
    Priority {
        Urgent => "URGENT",
        High => "HIGH",
        Normal => "NORMAL",
        Low => "LOW",
    }
}

impl std::str::FromStr for Priority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "URGENT" => Ok(Priority::Urgent),
            "HIGH" => Ok(Priority::High),
            "NORMAL" => Ok(Priority::Normal),
            "LOW" => Ok(Priority::Low),
            other => Err(ParseEnumError::new("Priority", other)),
        }
    }
}

/// Job lifecycle status. Forms the DAG in spec §4.1:
/// `QUEUED -> RUNNING -> {COMPLETED, FAILED, CANCELLED}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Queued,
    Running,
    Completed,
    Failed,
    Cancelled,
}

impl JobStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed | JobStatus::Cancelled)
    }
}

crate::simple_display! {
    JobStatus {
        Queued => "QUEUED",
        Running => "RUNNING",
        Completed => "COMPLETED",
        Failed => "FAILED",
        Cancelled => "CANCELLED",
    }
}

impl std::str::FromStr for JobStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "QUEUED" => Ok(JobStatus::Queued),
            "RUNNING" => Ok(JobStatus::Running),
            "COMPLETED" => Ok(JobStatus::Completed),
            "FAILED" => Ok(JobStatus::Failed),
            "CANCELLED" => Ok(JobStatus::Cancelled),
            other => Err(ParseEnumError::new("JobStatus", other)),
        }
    }
}

/// Error returned when parsing a wire name back into one of this module's enums fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized {type_name} value: {value}")]
pub struct ParseEnumError {
    type_name: &'static str,
    value: String,
}

impl ParseEnumError {
    fn new(type_name: &'static str, value: &str) -> Self {
        Self { type_name, value: value.to_string() }
    }
}

/// Parameters for a TTS synthesis request (spec §6.2).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TtsParameters {
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Stage-specific job input payload (spec §6.2).
///
/// Tagged by `type` to keep the wire shape self-describing; a claim-time
/// consumer that finds a tag mismatching the job's declared [`JobType`]
/// should mark the job `FAILED` with a schema-mismatch message rather than
/// deserializing blindly (Design Notes: "Dynamic JSON payloads").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobInput {
    Transcription {
        episode_id: String,
        s3_key: String,
    },
    Diarization {
        episode_id: String,
        s3_key: String,
    },
    TtsSynthesis {
        synthesis_request_id: String,
        #[serde(default)]
        speaker_id: Option<String>,
        #[serde(default)]
        voice_model_id: Option<String>,
        input_text: String,
        #[serde(default)]
        parameters: TtsParameters,
    },
    TtsTraining {
        voice_model_id: String,
        speaker_id: String,
        training_config: serde_json::Value,
    },
    /// Stages named in spec §3 but left unspecified in §6.2's payload table.
    Opaque {
        payload: serde_json::Value,
    },
}

impl JobInput {
    /// The [`JobType`] this payload should be claimed under.
    pub fn job_type(&self) -> JobType {
        match self {
            JobInput::Transcription { .. } => JobType::Transcription,
            JobInput::Diarization { .. } => JobType::Diarization,
            JobInput::TtsSynthesis { .. } => JobType::TtsSynthesis,
            JobInput::TtsTraining { .. } => JobType::TtsTraining,
            JobInput::Opaque { .. } => JobType::EmbeddingExtraction,
        }
    }
}

/// Stage-specific job output payload (spec §6.2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobOutput {
    Transcription {
        transcript_key: String,
        language: String,
        duration: f64,
        segment_count: usize,
        word_count: usize,
    },
    Diarization {
        rttm_key: String,
        segment_count: usize,
        speaker_count: usize,
        total_duration: f64,
        embedding_count: usize,
    },
    TtsSynthesis {
        output_key: String,
        duration: f64,
        sample_rate: u32,
        quality_score: f64,
    },
    TtsTraining {
        model_key: String,
        config_key: String,
        training_duration: f64,
        quality_score: f64,
    },
    Opaque {
        payload: serde_json::Value,
    },
}

/// A job instance (spec §3).
///
/// Invariants enforced by [`Job::transition_to_running`] /
/// [`Job::transition_to_terminal`] rather than by construction alone: a
/// `RUNNING` job always has `worker_id`/`started_at` set; `COMPLETED` implies
/// `progress == 100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub job_type: JobType,
    pub priority: Priority,
    pub input_data: JobInput,
    pub status: JobStatus,
    pub progress: u8,
    pub worker_id: Option<String>,
    pub started_at: Option<chrono::DateTime<chrono::Utc>>,
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub output_data: Option<JobOutput>,
    pub error_message: Option<String>,
}

impl Job {
    /// Construct a freshly-enqueued job. Producers are out of scope (spec
    /// §1); this is the shape a producer is expected to hand to
    /// [`crate::job::Job`] consumers (the relational store) at enqueue time.
    pub fn new_queued(id: JobId, input_data: JobInput, priority: Priority) -> Self {
        let job_type = input_data.job_type();
        Self {
            id,
            job_type,
            priority,
            input_data,
            status: JobStatus::Queued,
            progress: 0,
            worker_id: None,
            started_at: None,
            completed_at: None,
            output_data: None,
            error_message: None,
        }
    }

    /// Queue key this job belongs to under spec §6.4's convention.
    pub fn queue_key(&self) -> String {
        queue_key(self.job_type, self.priority)
    }

    /// Move a claimed job from `QUEUED` to `RUNNING`.
    ///
    /// Callers are expected to have already performed the conditional claim
    /// (`WHERE status = 'QUEUED'`) against the store; this only updates the
    /// in-memory view to match and rejects a job that wasn't `QUEUED`.
    pub fn transition_to_running(
        &mut self,
        worker_id: String,
        started_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<(), JobTransitionError> {
        if self.status != JobStatus::Queued {
            return Err(JobTransitionError::InvalidTransition {
                from: self.status,
                to: JobStatus::Running,
            });
        }
        self.status = JobStatus::Running;
        self.worker_id = Some(worker_id);
        self.started_at = Some(started_at);
        Ok(())
    }

    /// Move a `RUNNING` job to a terminal status (`COMPLETED` or `FAILED`).
    ///
    /// `CANCELLED` is not reachable through this path: spec.md's terminal-write
    /// guard (`WHERE status = 'RUNNING' AND worker_id = $1`) means only the
    /// claiming worker ever writes a terminal status, and cancellation is an
    /// out-of-band store write a worker never initiates itself.
    pub fn transition_to_terminal(
        &mut self,
        to: JobStatus,
        completed_at: chrono::DateTime<chrono::Utc>,
        output_data: Option<JobOutput>,
        error_message: Option<String>,
    ) -> Result<(), JobTransitionError> {
        if !matches!(to, JobStatus::Completed | JobStatus::Failed) {
            return Err(JobTransitionError::InvalidTransition { from: self.status, to });
        }
        if self.status != JobStatus::Running {
            return Err(JobTransitionError::InvalidTransition { from: self.status, to });
        }
        self.status = to;
        self.completed_at = Some(completed_at);
        self.output_data = output_data;
        self.error_message = error_message;
        if to == JobStatus::Completed {
            self.progress = 100;
        }
        Ok(())
    }
}

/// Error returned by an invalid [`Job`] state transition attempt.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum JobTransitionError {
    #[error("cannot transition job from {from} to {to}")]
    InvalidTransition { from: JobStatus, to: JobStatus },
}

/// Queue name per spec §6.4: `queue:<JOB_TYPE>:<PRIORITY>`.
pub fn queue_key(job_type: JobType, priority: Priority) -> String {
    format!("queue:{job_type}:{priority}")
}

crate::builder! {
    pub struct JobBuilder => Job {
        set {
            job_type: JobType = JobType::Transcription,
            priority: Priority = Priority::Normal,
            input_data: JobInput = JobInput::Transcription {
                episode_id: "ep-1".to_string(),
                s3_key: "episodes/ep-1/audio.wav".to_string(),
            },
            status: JobStatus = JobStatus::Queued,
            progress: u8 = 0,
        }
        option {
            worker_id: String = None,
            error_message: String = None,
        }
        computed {
            id: JobId = JobId::new(),
            started_at: Option<chrono::DateTime<chrono::Utc>> = None,
            completed_at: Option<chrono::DateTime<chrono::Utc>> = None,
            output_data: Option<JobOutput> = None,
        }
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
