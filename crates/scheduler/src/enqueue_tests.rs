// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use oj_core::{JobId, JobInput, Priority};
use oj_kv::{KvClient, QueueClient, RedisConfig};
use oj_storage::FakeJobStore;

fn redis_url() -> Option<String> {
    std::env::var("OJ_TEST_REDIS_URL").ok()
}

#[tokio::test]
#[ignore = "requires a local redis instance; set OJ_TEST_REDIS_URL to run"]
async fn enqueue_writes_row_and_pushes_queue_entry() {
    let Some(host) = redis_url() else { return };
    let config = RedisConfig {
        host,
        port: 6379,
        password: String::new(),
        db: 0,
        namespace: "oj-scheduler-test:".to_string(),
    };
    let kv = KvClient::new(&config).unwrap();
    let queue = QueueClient::new(kv);
    let store = FakeJobStore::new();

    let job = Job::new_queued(
        JobId::new(),
        JobInput::Transcription {
            episode_id: "ep-1".to_string(),
            s3_key: "episodes/ep-1/audio.wav".to_string(),
        },
        Priority::Normal,
    );

    enqueue(&store, &queue, &job).await.unwrap();

    let popped = queue
        .blocking_pop(&[job.queue_key()], std::time::Duration::from_secs(1))
        .await
        .unwrap();
    assert_eq!(popped, Some(job.id));
    assert!(store.get(job.id).await.unwrap().is_some());
}
