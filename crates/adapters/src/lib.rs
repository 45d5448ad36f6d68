// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! oj-adapters: the worker-to-adapter contract (spec §6.2) and the
//! blob-store/model-runtime boundaries the scheduler drives but does not
//! implement (spec §1 out-of-scope collaborators).

pub mod blob;
pub mod blob_keys;
pub mod diarization;
pub mod progress;
pub mod stage;
pub mod tts_synthesis;
pub mod tts_training;
pub mod transcription;

pub use blob::{BlobError, BlobStore};
#[cfg(any(test, feature = "test-support"))]
pub use blob::FakeBlobStore;
pub use diarization::{DiarizationAdapter, DiarizationResult, DiarizationRuntime};
#[cfg(any(test, feature = "test-support"))]
pub use diarization::FakeDiarizationRuntime;
pub use progress::{NullProgressSink, ProgressSink};
#[cfg(any(test, feature = "test-support"))]
pub use progress::{ProgressReport, RecordingProgressSink};
pub use stage::{AdapterError, StageAdapter};
pub use transcription::{TranscriptionAdapter, TranscriptionResult, TranscriptionRuntime};
#[cfg(any(test, feature = "test-support"))]
pub use transcription::FakeTranscriptionRuntime;
pub use tts_synthesis::{
    TtsSynthesisAdapter, TtsSynthesisRequest, TtsSynthesisResult, TtsSynthesisRuntime,
};
#[cfg(any(test, feature = "test-support"))]
pub use tts_synthesis::FakeTtsSynthesisRuntime;
pub use tts_training::{TtsTrainingAdapter, TtsTrainingResult, TtsTrainingRuntime};
#[cfg(any(test, feature = "test-support"))]
pub use tts_training::FakeTtsTrainingRuntime;
