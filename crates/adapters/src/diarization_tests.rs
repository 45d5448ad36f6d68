// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::progress::NullProgressSink;

fn sample_result() -> DiarizationResult {
    DiarizationResult {
        rttm_key: "diarization/ep-1/segments.rttm".to_string(),
        segment_count: 10,
        speaker_count: 3,
        total_duration: 300.0,
        embedding_count: 3,
    }
}

#[tokio::test]
async fn process_returns_diarization_output() {
    let adapter = DiarizationAdapter::new(FakeDiarizationRuntime::new(sample_result()));
    let input = JobInput::Diarization {
        episode_id: "ep-1".to_string(),
        s3_key: "episodes/ep-1/audio.wav".to_string(),
    };
    let sink = NullProgressSink;
    let output = adapter.process(input, &sink).await.unwrap();
    match output {
        JobOutput::Diarization { speaker_count, .. } => assert_eq!(speaker_count, 3),
        other => panic!("unexpected output: {other:?}"),
    }
}

#[tokio::test]
async fn process_rejects_mismatched_input() {
    let adapter = DiarizationAdapter::new(FakeDiarizationRuntime::new(sample_result()));
    let input = JobInput::Transcription {
        episode_id: "ep-1".to_string(),
        s3_key: "episodes/ep-1/audio.wav".to_string(),
    };
    let sink = NullProgressSink;
    assert!(matches!(
        adapter.process(input, &sink).await.unwrap_err(),
        AdapterError::SchemaMismatch { .. }
    ));
}
