use super::*;
use oj_core::JobInput;

#[test]
fn round_trips_through_job_record() {
    let job = Job::builder()
        .job_type(JobType::Diarization)
        .priority(Priority::High)
        .input_data(JobInput::Diarization {
            episode_id: "ep-42".to_string(),
            s3_key: "episodes/ep-42/audio.wav".to_string(),
        })
        .build();

    let record = JobRecord::from_job(&job, None).unwrap();
    assert_eq!(record.id, job.id.as_uuid());
    assert_eq!(record.job_type, "DIARIZATION");
    assert_eq!(record.priority, "HIGH");

    let round_tripped = record.into_job().unwrap();
    assert_eq!(round_tripped, job);
}

#[test]
fn into_job_rejects_unrecognized_status() {
    let job = Job::builder().build();
    let mut record = JobRecord::from_job(&job, None).unwrap();
    record.status = "BOGUS".to_string();
    assert!(record.into_job().is_err());
}
