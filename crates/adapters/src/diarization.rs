// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! DIARIZATION stage adapter (spec §6.2). Speaker diarization/embedding
//! extraction is out of scope (spec §1); this wraps an inner
//! [`DiarizationRuntime`] the caller supplies.

use crate::progress::ProgressSink;
use crate::stage::{AdapterError, StageAdapter};
use async_trait::async_trait;
use oj_core::{JobInput, JobOutput, JobType};

#[derive(Debug, Clone)]
pub struct DiarizationResult {
    pub rttm_key: String,
    pub segment_count: usize,
    pub speaker_count: usize,
    pub total_duration: f64,
    pub embedding_count: usize,
}

#[async_trait]
pub trait DiarizationRuntime: Clone + Send + Sync + 'static {
    async fn diarize(
        &self,
        episode_id: &str,
        s3_key: &str,
        progress: &(dyn ProgressSink + Send + Sync),
    ) -> Result<DiarizationResult, String>;
}

#[derive(Clone)]
pub struct DiarizationAdapter<R: DiarizationRuntime> {
    runtime: R,
}

impl<R: DiarizationRuntime> DiarizationAdapter<R> {
    pub fn new(runtime: R) -> Self {
        Self { runtime }
    }
}

#[async_trait]
impl<R: DiarizationRuntime> StageAdapter for DiarizationAdapter<R> {
    async fn process(
        &self,
        input: JobInput,
        progress: &(dyn ProgressSink + Send + Sync),
    ) -> Result<JobOutput, AdapterError> {
        let (episode_id, s3_key) = match input {
            JobInput::Diarization { episode_id, s3_key } => (episode_id, s3_key),
            other => {
                return Err(AdapterError::SchemaMismatch {
                    expected: JobType::Diarization,
                    actual: other.job_type(),
                })
            }
        };

        progress.report(0, "starting diarization").await;
        let result = self
            .runtime
            .diarize(&episode_id, &s3_key, progress)
            .await
            .map_err(AdapterError::Model)?;
        progress.report(100, "diarization complete").await;

        Ok(JobOutput::Diarization {
            rttm_key: result.rttm_key,
            segment_count: result.segment_count,
            speaker_count: result.speaker_count,
            total_duration: result.total_duration,
            embedding_count: result.embedding_count,
        })
    }
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::{DiarizationResult, DiarizationRuntime};
    use crate::progress::ProgressSink;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone)]
    pub struct FakeDiarizationRuntime {
        calls: Arc<Mutex<Vec<(String, String)>>>,
        result: DiarizationResult,
    }

    impl FakeDiarizationRuntime {
        pub fn new(result: DiarizationResult) -> Self {
            Self { calls: Arc::new(Mutex::new(Vec::new())), result }
        }

        pub fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl DiarizationRuntime for FakeDiarizationRuntime {
        async fn diarize(
            &self,
            episode_id: &str,
            s3_key: &str,
            _progress: &(dyn ProgressSink + Send + Sync),
        ) -> Result<DiarizationResult, String> {
            self.calls.lock().push((episode_id.to_string(), s3_key.to_string()));
            Ok(self.result.clone())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeDiarizationRuntime;

#[cfg(test)]
#[path = "diarization_tests.rs"]
mod tests;
