// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TRANSCRIPTION stage adapter (spec §6.2). Model invocation (WhisperX or
//! equivalent ASR) is out of scope (spec §1); this wraps an inner
//! [`TranscriptionRuntime`] the caller supplies.

use crate::progress::ProgressSink;
use crate::stage::{AdapterError, StageAdapter};
use async_trait::async_trait;
use oj_core::{JobInput, JobOutput, JobType};

/// Result of a single transcription model invocation.
#[derive(Debug, Clone)]
pub struct TranscriptionResult {
    pub transcript_key: String,
    pub language: String,
    pub duration: f64,
    pub segment_count: usize,
    pub word_count: usize,
}

/// The external ASR model, abstracted behind a trait so this crate never
/// embeds model code (spec §1 out-of-scope boundary).
#[async_trait]
pub trait TranscriptionRuntime: Clone + Send + Sync + 'static {
    async fn transcribe(
        &self,
        episode_id: &str,
        s3_key: &str,
        progress: &(dyn ProgressSink + Send + Sync),
    ) -> Result<TranscriptionResult, String>;
}

/// Adapter wrapping a [`TranscriptionRuntime`].
#[derive(Clone)]
pub struct TranscriptionAdapter<R: TranscriptionRuntime> {
    runtime: R,
}

impl<R: TranscriptionRuntime> TranscriptionAdapter<R> {
    pub fn new(runtime: R) -> Self {
        Self { runtime }
    }
}

#[async_trait]
impl<R: TranscriptionRuntime> StageAdapter for TranscriptionAdapter<R> {
    async fn process(
        &self,
        input: JobInput,
        progress: &(dyn ProgressSink + Send + Sync),
    ) -> Result<JobOutput, AdapterError> {
        let (episode_id, s3_key) = match input {
            JobInput::Transcription { episode_id, s3_key } => (episode_id, s3_key),
            other => {
                return Err(AdapterError::SchemaMismatch {
                    expected: JobType::Transcription,
                    actual: other.job_type(),
                })
            }
        };

        progress.report(0, "starting transcription").await;
        let result = self
            .runtime
            .transcribe(&episode_id, &s3_key, progress)
            .await
            .map_err(AdapterError::Model)?;
        progress.report(100, "transcription complete").await;

        Ok(JobOutput::Transcription {
            transcript_key: result.transcript_key,
            language: result.language,
            duration: result.duration,
            segment_count: result.segment_count,
            word_count: result.word_count,
        })
    }
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::{TranscriptionResult, TranscriptionRuntime};
    use crate::progress::ProgressSink;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Fake ASR runtime returning a fixed or injected result per call.
    #[derive(Clone)]
    pub struct FakeTranscriptionRuntime {
        calls: Arc<Mutex<Vec<(String, String)>>>,
        result: TranscriptionResult,
        fail: Option<String>,
    }

    impl FakeTranscriptionRuntime {
        pub fn new(result: TranscriptionResult) -> Self {
            Self { calls: Arc::new(Mutex::new(Vec::new())), result, fail: None }
        }

        pub fn failing(message: impl Into<String>) -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                result: TranscriptionResult {
                    transcript_key: String::new(),
                    language: String::new(),
                    duration: 0.0,
                    segment_count: 0,
                    word_count: 0,
                },
                fail: Some(message.into()),
            }
        }

        pub fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl TranscriptionRuntime for FakeTranscriptionRuntime {
        async fn transcribe(
            &self,
            episode_id: &str,
            s3_key: &str,
            _progress: &(dyn ProgressSink + Send + Sync),
        ) -> Result<TranscriptionResult, String> {
            self.calls.lock().push((episode_id.to_string(), s3_key.to_string()));
            if let Some(msg) = &self.fail {
                return Err(msg.clone());
            }
            Ok(self.result.clone())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeTranscriptionRuntime;

#[cfg(test)]
#[path = "transcription_tests.rs"]
mod tests;
