// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The worker-to-adapter contract (spec §6.2): a fixed input/output/progress
//! shape the scheduler drives, with the actual model invocation left to an
//! inner runtime the caller supplies (spec §9 Design Notes, "External model
//! calls": "the spec deliberately leaves the implementer free to wrap native
//! libraries, spawn child processes, or call remote services").

use crate::progress::ProgressSink;
use async_trait::async_trait;
use oj_core::{JobInput, JobOutput, JobType};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    /// The job's `input_data` tag didn't match what this adapter handles.
    /// Per Design Notes "Dynamic JSON payloads", a claim-time caller should
    /// record this as a FAILED job rather than panic.
    #[error("schema mismatch: expected {expected} input, got a job tagged for {actual}")]
    SchemaMismatch { expected: JobType, actual: JobType },
    #[error("model runtime error: {0}")]
    Model(String),
    #[error("blob store error: {0}")]
    Blob(#[from] crate::blob::BlobError),
}

/// `stageAdapter` from spec §4.1: `process(jobInput) -> jobOutput` with a
/// side-channel progress sink.
#[async_trait]
pub trait StageAdapter: Send + Sync + 'static {
    async fn process(
        &self,
        input: JobInput,
        progress: &(dyn ProgressSink + Send + Sync),
    ) -> Result<JobOutput, AdapterError>;
}
