use super::*;

fn redis_url() -> Option<String> {
    std::env::var("OJ_TEST_REDIS_URL").ok()
}

#[tokio::test]
#[ignore = "requires a local redis instance; set OJ_TEST_REDIS_URL to run"]
async fn report_then_get_round_trips() {
    let Some(url) = redis_url() else { return };
    let client = redis::Client::open(url).unwrap();
    let kv = KvClient { client, namespace: "oj-kv-test:".to_string() };
    let progress = ProgressClient::new(kv);

    let id = JobId::new();
    progress.report(id, 60, "transcribing segment 3/5").await.unwrap();

    let record = progress.get(id).await.unwrap().unwrap();
    assert_eq!(record.progress, 60);
    assert_eq!(record.message, "transcribing segment 3/5");
}

#[tokio::test]
#[ignore = "requires a local redis instance; set OJ_TEST_REDIS_URL to run"]
async fn get_on_unreported_job_returns_none() {
    let Some(url) = redis_url() else { return };
    let client = redis::Client::open(url).unwrap();
    let kv = KvClient { client, namespace: "oj-kv-test:".to_string() };
    let progress = ProgressClient::new(kv);

    let record = progress.get(JobId::new()).await.unwrap();
    assert_eq!(record, None);
}
