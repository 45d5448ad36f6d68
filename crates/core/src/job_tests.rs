use super::*;

fn now() -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default()
}

#[test]
fn queue_key_matches_convention() {
    let job = Job::builder()
        .job_type(JobType::Transcription)
        .priority(Priority::Urgent)
        .build();
    assert_eq!(job.queue_key(), "queue:TRANSCRIPTION:URGENT");
}

#[test]
fn priority_scan_order_is_urgent_first() {
    assert_eq!(Priority::ALL, [Priority::Urgent, Priority::High, Priority::Normal, Priority::Low]);
}

#[test]
fn transition_to_running_requires_queued() {
    let mut job = Job::builder().status(JobStatus::Running).build();
    let err = job.transition_to_running("worker-1".to_string(), now()).unwrap_err();
    assert_eq!(
        err,
        JobTransitionError::InvalidTransition { from: JobStatus::Running, to: JobStatus::Running }
    );
}

#[test]
fn transition_to_running_sets_worker_and_started_at() {
    let mut job = Job::builder().status(JobStatus::Queued).build();
    job.transition_to_running("worker-1".to_string(), now()).unwrap();
    assert_eq!(job.status, JobStatus::Running);
    assert_eq!(job.worker_id.as_deref(), Some("worker-1"));
    assert_eq!(job.started_at, Some(now()));
}

#[test]
fn transition_to_completed_sets_progress_full() {
    let mut job = Job::builder().status(JobStatus::Running).build();
    let output = JobOutput::Transcription {
        transcript_key: "transcripts/ep-1/whisperx.json".to_string(),
        language: "en".to_string(),
        duration: 120.5,
        segment_count: 42,
        word_count: 1200,
    };
    job.transition_to_terminal(JobStatus::Completed, now(), Some(output), None).unwrap();
    assert_eq!(job.status, JobStatus::Completed);
    assert_eq!(job.progress, 100);
    assert!(job.error_message.is_none());
}

#[test]
fn transition_to_failed_requires_running() {
    let mut job = Job::builder().status(JobStatus::Queued).build();
    let err = job
        .transition_to_terminal(JobStatus::Failed, now(), None, Some("boom".to_string()))
        .unwrap_err();
    assert_eq!(
        err,
        JobTransitionError::InvalidTransition { from: JobStatus::Queued, to: JobStatus::Failed }
    );
}

#[test]
fn transition_to_terminal_rejects_cancelled() {
    let mut job = Job::builder().status(JobStatus::Running).build();
    let err = job.transition_to_terminal(JobStatus::Cancelled, now(), None, None).unwrap_err();
    assert_eq!(
        err,
        JobTransitionError::InvalidTransition { from: JobStatus::Running, to: JobStatus::Cancelled }
    );
}

#[test]
fn job_input_reports_matching_job_type() {
    let input = JobInput::TtsSynthesis {
        synthesis_request_id: "req-1".to_string(),
        speaker_id: None,
        voice_model_id: Some("model-1".to_string()),
        input_text: "hello".to_string(),
        parameters: TtsParameters::default(),
    };
    assert_eq!(input.job_type(), JobType::TtsSynthesis);
}

#[test]
fn job_input_serializes_with_type_tag() {
    let input = JobInput::Transcription {
        episode_id: "ep-1".to_string(),
        s3_key: "episodes/ep-1/audio.wav".to_string(),
    };
    let value = serde_json::to_value(&input).unwrap();
    assert_eq!(value["type"], "TRANSCRIPTION");
    assert_eq!(value["episode_id"], "ep-1");
}

#[test]
fn job_status_display_matches_wire_names() {
    assert_eq!(JobStatus::Queued.to_string(), "QUEUED");
    assert_eq!(JobStatus::Cancelled.to_string(), "CANCELLED");
}

#[test]
fn job_status_round_trips_through_display_and_from_str() {
    for status in [
        JobStatus::Queued,
        JobStatus::Running,
        JobStatus::Completed,
        JobStatus::Failed,
        JobStatus::Cancelled,
    ] {
        let parsed: JobStatus = status.to_string().parse().unwrap();
        assert_eq!(parsed, status);
    }
}

#[test]
fn job_type_from_str_rejects_unknown_value() {
    let err = "BOGUS".parse::<JobType>().unwrap_err();
    assert_eq!(err.to_string(), "unrecognized JobType value: BOGUS");
}

#[test]
fn priority_from_str_round_trips() {
    for priority in Priority::ALL {
        let parsed: Priority = priority.to_string().parse().unwrap();
        assert_eq!(parsed, priority);
    }
}

#[test]
fn terminal_statuses_are_identified() {
    assert!(JobStatus::Completed.is_terminal());
    assert!(JobStatus::Failed.is_terminal());
    assert!(JobStatus::Cancelled.is_terminal());
    assert!(!JobStatus::Queued.is_terminal());
    assert!(!JobStatus::Running.is_terminal());
}
