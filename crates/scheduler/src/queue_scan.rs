// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The priority-class scan order a worker polls (spec §4.1).

use oj_core::{queue_key, JobType, Priority};

/// Queue keys a worker should scan, in strict priority order per job type.
///
/// For a single-type worker this is just `URGENT, HIGH, NORMAL, LOW` for
/// that type. For a heterogeneous worker (e.g. one accepting `DIARIZATION`,
/// `EMBEDDING_EXTRACTION`, `SPEAKER_CLUSTERING`), the scan is the Cartesian
/// product ordered outer-by-type, inner-by-priority — this yields priority
/// dominance *within* a worker's declared types but no cross-type ordering
/// guarantee, exactly as spec §4.1 describes.
pub fn worker_scan_keys(job_types: &[JobType]) -> Vec<String> {
    let mut keys = Vec::with_capacity(job_types.len() * Priority::ALL.len());
    for job_type in job_types {
        for priority in Priority::ALL {
            keys.push(queue_key(*job_type, priority));
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_type_worker_scans_strict_priority_order() {
        let keys = worker_scan_keys(&[JobType::Transcription]);
        assert_eq!(
            keys,
            vec![
                "queue:TRANSCRIPTION:URGENT",
                "queue:TRANSCRIPTION:HIGH",
                "queue:TRANSCRIPTION:NORMAL",
                "queue:TRANSCRIPTION:LOW",
            ]
        );
    }

    #[test]
    fn heterogeneous_worker_scans_outer_by_type_inner_by_priority() {
        let keys = worker_scan_keys(&[JobType::Diarization, JobType::SpeakerClustering]);
        assert_eq!(
            keys,
            vec![
                "queue:DIARIZATION:URGENT",
                "queue:DIARIZATION:HIGH",
                "queue:DIARIZATION:NORMAL",
                "queue:DIARIZATION:LOW",
                "queue:SPEAKER_CLUSTERING:URGENT",
                "queue:SPEAKER_CLUSTERING:HIGH",
                "queue:SPEAKER_CLUSTERING:NORMAL",
                "queue:SPEAKER_CLUSTERING:LOW",
            ]
        );
    }
}
