use super::*;

fn redis_url() -> Option<String> {
    std::env::var("OJ_TEST_REDIS_URL").ok()
}

fn limiter() -> Option<RateLimiter> {
    let url = redis_url()?;
    let client = redis::Client::open(url).unwrap();
    let kv = KvClient { client, namespace: "oj-kv-test:".to_string() };
    Some(RateLimiter::new(kv))
}

#[tokio::test]
#[ignore = "requires a local redis instance; set OJ_TEST_REDIS_URL to run"]
async fn sliding_window_allows_then_denies() {
    let Some(limiter) = limiter() else { return };
    let id = format!("sliding-{}", uuid::Uuid::new_v4());

    let mut decisions = Vec::new();
    for t in [0, 1, 2, 3] {
        decisions.push(limiter.check(&id, 3, 10_000, Algorithm::Sliding, t).await.unwrap());
    }

    assert!(decisions[0].allow && decisions[1].allow && decisions[2].allow);
    assert!(!decisions[3].allow);
    assert_eq!(decisions[3].remaining, 0);
    assert_eq!(decisions[3].retry_after, Some(10));
}

#[tokio::test]
#[ignore = "requires a local redis instance; set OJ_TEST_REDIS_URL to run"]
async fn fixed_window_resets_on_next_bucket() {
    let Some(limiter) = limiter() else { return };
    let id = format!("fixed-{}", uuid::Uuid::new_v4());

    let a = limiter.check(&id, 2, 1000, Algorithm::Fixed, 0).await.unwrap();
    let b = limiter.check(&id, 2, 1000, Algorithm::Fixed, 0).await.unwrap();
    let c = limiter.check(&id, 2, 1000, Algorithm::Fixed, 0).await.unwrap();
    assert!(a.allow && b.allow);
    assert!(!c.allow);

    let d = limiter.check(&id, 2, 1000, Algorithm::Fixed, 1001).await.unwrap();
    assert!(d.allow);
}

#[tokio::test]
#[ignore = "requires a local redis instance; set OJ_TEST_REDIS_URL to run"]
async fn sliding_window_boundary_behavior() {
    let Some(limiter) = limiter() else { return };
    let id = format!("boundary-{}", uuid::Uuid::new_v4());

    let hit = limiter.check(&id, 1, 10, Algorithm::Sliding, 0).await.unwrap();
    assert!(hit.allow);

    let still_counts = limiter.check(&id, 1, 10, Algorithm::Sliding, 9).await.unwrap();
    assert!(!still_counts.allow, "hit at t=0 must still count at t=window-1");

    let expired = limiter.check(&id, 1, 10, Algorithm::Sliding, 11).await.unwrap();
    assert!(expired.allow, "hit at t=0 must no longer count past t=window+1");
}
