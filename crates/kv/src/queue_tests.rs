use super::*;

fn redis_url() -> Option<String> {
    std::env::var("OJ_TEST_REDIS_URL").ok()
}

#[tokio::test]
#[ignore = "requires a local redis instance; set OJ_TEST_REDIS_URL to run"]
async fn push_then_pop_returns_same_job() {
    let Some(url) = redis_url() else { return };
    let client = redis::Client::open(url).unwrap();
    let kv = KvClient { client, namespace: "oj-kv-test:".to_string() };
    let queue = QueueClient::new(kv);

    let id = JobId::new();
    queue.push("queue:TRANSCRIPTION:URGENT", id).await.unwrap();

    let popped = queue
        .blocking_pop(&["queue:TRANSCRIPTION:URGENT".to_string()], Duration::from_secs(1))
        .await
        .unwrap();
    assert_eq!(popped, Some(id));
}

#[tokio::test]
#[ignore = "requires a local redis instance; set OJ_TEST_REDIS_URL to run"]
async fn pop_on_empty_queue_times_out_with_none() {
    let Some(url) = redis_url() else { return };
    let client = redis::Client::open(url).unwrap();
    let kv = KvClient { client, namespace: "oj-kv-test:".to_string() };
    let queue = QueueClient::new(kv);

    let popped = queue
        .blocking_pop(&["queue:TRANSCRIPTION:NOBODY_PUSHES_HERE".to_string()], Duration::from_millis(200))
        .await
        .unwrap();
    assert_eq!(popped, None);
}
