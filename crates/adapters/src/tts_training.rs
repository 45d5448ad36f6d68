// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TTS_TRAINING stage adapter (spec §6.2).

use crate::progress::ProgressSink;
use crate::stage::{AdapterError, StageAdapter};
use async_trait::async_trait;
use oj_core::{JobInput, JobOutput, JobType};

#[derive(Debug, Clone)]
pub struct TtsTrainingResult {
    pub model_key: String,
    pub config_key: String,
    pub training_duration: f64,
    pub quality_score: f64,
}

#[async_trait]
pub trait TtsTrainingRuntime: Clone + Send + Sync + 'static {
    async fn train(
        &self,
        voice_model_id: &str,
        speaker_id: &str,
        training_config: &serde_json::Value,
        progress: &(dyn ProgressSink + Send + Sync),
    ) -> Result<TtsTrainingResult, String>;
}

#[derive(Clone)]
pub struct TtsTrainingAdapter<R: TtsTrainingRuntime> {
    runtime: R,
}

impl<R: TtsTrainingRuntime> TtsTrainingAdapter<R> {
    pub fn new(runtime: R) -> Self {
        Self { runtime }
    }
}

#[async_trait]
impl<R: TtsTrainingRuntime> StageAdapter for TtsTrainingAdapter<R> {
    async fn process(
        &self,
        input: JobInput,
        progress: &(dyn ProgressSink + Send + Sync),
    ) -> Result<JobOutput, AdapterError> {
        let (voice_model_id, speaker_id, training_config) = match input {
            JobInput::TtsTraining { voice_model_id, speaker_id, training_config } => {
                (voice_model_id, speaker_id, training_config)
            }
            other => {
                return Err(AdapterError::SchemaMismatch {
                    expected: JobType::TtsTraining,
                    actual: other.job_type(),
                })
            }
        };

        progress.report(0, "starting voice training").await;
        let result = self
            .runtime
            .train(&voice_model_id, &speaker_id, &training_config, progress)
            .await
            .map_err(AdapterError::Model)?;
        progress.report(100, "voice training complete").await;

        Ok(JobOutput::TtsTraining {
            model_key: result.model_key,
            config_key: result.config_key,
            training_duration: result.training_duration,
            quality_score: result.quality_score,
        })
    }
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::{TtsTrainingResult, TtsTrainingRuntime};
    use crate::progress::ProgressSink;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone)]
    pub struct FakeTtsTrainingRuntime {
        calls: Arc<Mutex<Vec<(String, String)>>>,
        result: TtsTrainingResult,
    }

    impl FakeTtsTrainingRuntime {
        pub fn new(result: TtsTrainingResult) -> Self {
            Self { calls: Arc::new(Mutex::new(Vec::new())), result }
        }

        pub fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl TtsTrainingRuntime for FakeTtsTrainingRuntime {
        async fn train(
            &self,
            voice_model_id: &str,
            speaker_id: &str,
            _training_config: &serde_json::Value,
            _progress: &(dyn ProgressSink + Send + Sync),
        ) -> Result<TtsTrainingResult, String> {
            self.calls.lock().push((voice_model_id.to_string(), speaker_id.to_string()));
            Ok(self.result.clone())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeTtsTrainingRuntime;

#[cfg(test)]
#[path = "tts_training_tests.rs"]
mod tests;
