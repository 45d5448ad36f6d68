// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Blob-store key conventions (spec §6.3). Pure formatting functions; the
//! actual blob content lives behind [`crate::blob::BlobStore`].

pub fn transcript_key(episode_id: &str) -> String {
    format!("transcripts/{episode_id}/whisperx.json")
}

pub fn diarization_key(episode_id: &str) -> String {
    format!("diarization/{episode_id}/segments.rttm")
}

pub fn embedding_key(episode_id: &str, speaker_sha256: &str) -> String {
    format!("embeddings/{episode_id}/spk-{speaker_sha256}.npy")
}

pub fn synth_output_key(speaker_id: Option<&str>, request_id: &str) -> String {
    let speaker = speaker_id.unwrap_or("unknown");
    format!("synth/{speaker}/{request_id}/output.wav")
}

pub fn voice_model_key(speaker_id: &str, version: u32) -> String {
    format!("voices/{speaker_id}/xtts-v2/v{version}/model.pth")
}

pub fn voice_config_key(speaker_id: &str, version: u32) -> String {
    format!("voices/{speaker_id}/xtts-v2/v{version}/config.json")
}
