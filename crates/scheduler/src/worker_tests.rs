// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::progress_sink::NullProgressSinkFactory;
use oj_adapters::{FakeTranscriptionRuntime, TranscriptionAdapter, TranscriptionResult};
use oj_core::{FakeClock, Job, JobInput, JobStatus, Priority};
use oj_kv::{KvClient, QueueClient, RedisConfig};
use oj_storage::FakeJobStore;

fn test_queue() -> QueueClient {
    let config = RedisConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        password: String::new(),
        db: 0,
        namespace: "oj-scheduler-test:".to_string(),
    };
    // `redis::Client::open` only parses the URL; it never connects, so this
    // is safe to construct without a live Redis instance for tests that
    // never exercise the queue itself.
    let kv = KvClient::new(&config).unwrap();
    QueueClient::new(kv)
}

fn worker_with(
    worker_id: &str,
    store: Arc<dyn JobStore>,
    adapter: Arc<dyn StageAdapter>,
    clock: FakeClock,
) -> Worker<FakeClock> {
    Worker::new(
        worker_id,
        WorkerConfig::new(vec![JobType::Transcription], chrono::Duration::seconds(60)),
        store,
        test_queue(),
        Arc::new(NullProgressSinkFactory),
        adapter,
        clock,
    )
}

fn sample_job() -> Job {
    Job::builder()
        .input_data(JobInput::Transcription {
            episode_id: "ep-1".to_string(),
            s3_key: "episodes/ep-1/audio.wav".to_string(),
        })
        .priority(Priority::Normal)
        .build()
}

#[tokio::test]
async fn claim_and_dispatch_completes_a_successful_job() {
    let store: Arc<dyn JobStore> = Arc::new(FakeJobStore::new());
    let job = sample_job();
    store.enqueue(&job).await.unwrap();

    let runtime = FakeTranscriptionRuntime::new(TranscriptionResult {
        transcript_key: "transcripts/ep-1/whisperx.json".to_string(),
        language: "en".to_string(),
        duration: 10.0,
        segment_count: 1,
        word_count: 5,
    });
    let adapter: Arc<dyn StageAdapter> = Arc::new(TranscriptionAdapter::new(runtime));
    let worker = worker_with("worker-1", store.clone(), adapter, FakeClock::new());

    worker.claim_and_dispatch(job.id).await;

    let stored = store.get(job.id).await.unwrap().unwrap();
    assert_eq!(stored.status, JobStatus::Completed);
    assert_eq!(stored.progress, 100);
    assert_eq!(stored.worker_id.as_deref(), Some("worker-1"));
}

#[tokio::test]
async fn claim_and_dispatch_records_adapter_failure() {
    let store: Arc<dyn JobStore> = Arc::new(FakeJobStore::new());
    let job = sample_job();
    store.enqueue(&job).await.unwrap();

    let runtime = FakeTranscriptionRuntime::failing("model crashed");
    let adapter: Arc<dyn StageAdapter> = Arc::new(TranscriptionAdapter::new(runtime));
    let worker = worker_with("worker-1", store.clone(), adapter, FakeClock::new());

    worker.claim_and_dispatch(job.id).await;

    let stored = store.get(job.id).await.unwrap().unwrap();
    assert_eq!(stored.status, JobStatus::Failed);
    assert!(stored.error_message.unwrap().contains("model crashed"));
}

#[tokio::test]
async fn claim_and_dispatch_discards_a_second_claim() {
    let store: Arc<dyn JobStore> = Arc::new(FakeJobStore::new());
    let job = sample_job();
    store.enqueue(&job).await.unwrap();

    let runtime = FakeTranscriptionRuntime::new(TranscriptionResult {
        transcript_key: "transcripts/ep-1/whisperx.json".to_string(),
        language: "en".to_string(),
        duration: 10.0,
        segment_count: 1,
        word_count: 5,
    });
    let adapter: Arc<dyn StageAdapter> = Arc::new(TranscriptionAdapter::new(runtime.clone()));

    let worker_a = worker_with("worker-1", store.clone(), adapter.clone(), FakeClock::new());
    let worker_b = worker_with("worker-2", store.clone(), adapter, FakeClock::new());

    worker_a.claim_and_dispatch(job.id).await;
    worker_b.claim_and_dispatch(job.id).await;

    // Only the first claimant should have actually invoked the adapter.
    assert_eq!(runtime.calls().len(), 1);
    let stored = store.get(job.id).await.unwrap().unwrap();
    assert_eq!(stored.worker_id.as_deref(), Some("worker-1"));
}

#[tokio::test]
async fn claim_and_dispatch_discards_a_cancelled_job() {
    let store: Arc<dyn JobStore> = Arc::new(FakeJobStore::new());
    let job = sample_job();
    store.enqueue(&job).await.unwrap();
    store.cancel(job.id).await.unwrap();

    let runtime = FakeTranscriptionRuntime::new(TranscriptionResult {
        transcript_key: "transcripts/ep-1/whisperx.json".to_string(),
        language: "en".to_string(),
        duration: 10.0,
        segment_count: 1,
        word_count: 5,
    });
    let adapter: Arc<dyn StageAdapter> = Arc::new(TranscriptionAdapter::new(runtime.clone()));
    let worker = worker_with("worker-1", store.clone(), adapter, FakeClock::new());

    worker.claim_and_dispatch(job.id).await;

    assert!(runtime.calls().is_empty(), "adapter must not run against a cancelled job");
    let stored = store.get(job.id).await.unwrap().unwrap();
    assert_eq!(stored.status, JobStatus::Cancelled);
}
