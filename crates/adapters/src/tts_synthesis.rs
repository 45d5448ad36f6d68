// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TTS_SYNTHESIS stage adapter (spec §6.2).

use crate::progress::ProgressSink;
use crate::stage::{AdapterError, StageAdapter};
use async_trait::async_trait;
use oj_core::{JobInput, JobOutput, JobType, TtsParameters};

#[derive(Debug, Clone)]
pub struct TtsSynthesisResult {
    pub output_key: String,
    pub duration: f64,
    pub sample_rate: u32,
    pub quality_score: f64,
}

/// Input bundle handed to the runtime, mirroring §6.2's `TTS_SYNTHESIS` input
/// keys (`synthesisRequestId, speakerId?, voiceModelId?, inputText, parameters`).
#[derive(Debug, Clone)]
pub struct TtsSynthesisRequest {
    pub synthesis_request_id: String,
    pub speaker_id: Option<String>,
    pub voice_model_id: Option<String>,
    pub input_text: String,
    pub parameters: TtsParameters,
}

#[async_trait]
pub trait TtsSynthesisRuntime: Clone + Send + Sync + 'static {
    async fn synthesize(
        &self,
        request: &TtsSynthesisRequest,
        progress: &(dyn ProgressSink + Send + Sync),
    ) -> Result<TtsSynthesisResult, String>;
}

#[derive(Clone)]
pub struct TtsSynthesisAdapter<R: TtsSynthesisRuntime> {
    runtime: R,
}

impl<R: TtsSynthesisRuntime> TtsSynthesisAdapter<R> {
    pub fn new(runtime: R) -> Self {
        Self { runtime }
    }
}

#[async_trait]
impl<R: TtsSynthesisRuntime> StageAdapter for TtsSynthesisAdapter<R> {
    async fn process(
        &self,
        input: JobInput,
        progress: &(dyn ProgressSink + Send + Sync),
    ) -> Result<JobOutput, AdapterError> {
        let request = match input {
            JobInput::TtsSynthesis {
                synthesis_request_id,
                speaker_id,
                voice_model_id,
                input_text,
                parameters,
            } => TtsSynthesisRequest {
                synthesis_request_id,
                speaker_id,
                voice_model_id,
                input_text,
                parameters,
            },
            other => {
                return Err(AdapterError::SchemaMismatch {
                    expected: JobType::TtsSynthesis,
                    actual: other.job_type(),
                })
            }
        };

        progress.report(0, "starting synthesis").await;
        let result =
            self.runtime.synthesize(&request, progress).await.map_err(AdapterError::Model)?;
        progress.report(100, "synthesis complete").await;

        Ok(JobOutput::TtsSynthesis {
            output_key: result.output_key,
            duration: result.duration,
            sample_rate: result.sample_rate,
            quality_score: result.quality_score,
        })
    }
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::{TtsSynthesisRequest, TtsSynthesisResult, TtsSynthesisRuntime};
    use crate::progress::ProgressSink;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone)]
    pub struct FakeTtsSynthesisRuntime {
        calls: Arc<Mutex<Vec<TtsSynthesisRequest>>>,
        result: TtsSynthesisResult,
    }

    impl FakeTtsSynthesisRuntime {
        pub fn new(result: TtsSynthesisResult) -> Self {
            Self { calls: Arc::new(Mutex::new(Vec::new())), result }
        }

        pub fn calls(&self) -> Vec<TtsSynthesisRequest> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl TtsSynthesisRuntime for FakeTtsSynthesisRuntime {
        async fn synthesize(
            &self,
            request: &TtsSynthesisRequest,
            _progress: &(dyn ProgressSink + Send + Sync),
        ) -> Result<TtsSynthesisResult, String> {
            self.calls.lock().push(request.clone());
            Ok(self.result.clone())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeTtsSynthesisRuntime;

#[cfg(test)]
#[path = "tts_synthesis_tests.rs"]
mod tests;
