// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::progress::{NullProgressSink, ProgressSink, RecordingProgressSink};

fn sample_result() -> TranscriptionResult {
    TranscriptionResult {
        transcript_key: "transcripts/ep-1/whisperx.json".to_string(),
        language: "en".to_string(),
        duration: 120.5,
        segment_count: 42,
        word_count: 980,
    }
}

#[tokio::test]
async fn process_returns_transcription_output() {
    let adapter = TranscriptionAdapter::new(FakeTranscriptionRuntime::new(sample_result()));
    let input = JobInput::Transcription {
        episode_id: "ep-1".to_string(),
        s3_key: "episodes/ep-1/audio.wav".to_string(),
    };
    let sink = NullProgressSink;
    let output = adapter.process(input, &sink).await.unwrap();
    match output {
        JobOutput::Transcription { transcript_key, language, segment_count, .. } => {
            assert_eq!(transcript_key, "transcripts/ep-1/whisperx.json");
            assert_eq!(language, "en");
            assert_eq!(segment_count, 42);
        }
        other => panic!("unexpected output: {other:?}"),
    }
}

#[tokio::test]
async fn process_rejects_mismatched_input() {
    let adapter = TranscriptionAdapter::new(FakeTranscriptionRuntime::new(sample_result()));
    let input = JobInput::Diarization {
        episode_id: "ep-1".to_string(),
        s3_key: "episodes/ep-1/audio.wav".to_string(),
    };
    let sink = NullProgressSink;
    let err = adapter.process(input, &sink).await.unwrap_err();
    assert!(matches!(err, AdapterError::SchemaMismatch { .. }));
}

#[tokio::test]
async fn process_reports_start_and_completion() {
    let adapter = TranscriptionAdapter::new(FakeTranscriptionRuntime::new(sample_result()));
    let input = JobInput::Transcription {
        episode_id: "ep-1".to_string(),
        s3_key: "episodes/ep-1/audio.wav".to_string(),
    };
    let sink = RecordingProgressSink::new();
    adapter.process(input, &sink).await.unwrap();
    let reports = sink.reports();
    assert_eq!(reports.first().map(|r| r.pct), Some(0));
    assert_eq!(reports.last().map(|r| r.pct), Some(100));
}

#[tokio::test]
async fn process_propagates_runtime_failure() {
    let adapter = TranscriptionAdapter::new(FakeTranscriptionRuntime::failing("model crashed"));
    let input = JobInput::Transcription {
        episode_id: "ep-1".to_string(),
        s3_key: "episodes/ep-1/audio.wav".to_string(),
    };
    let sink = NullProgressSink;
    let err = adapter.process(input, &sink).await.unwrap_err();
    assert!(matches!(err, AdapterError::Model(m) if m == "model crashed"));
}
