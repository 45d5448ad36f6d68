use super::*;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use oj_core::SystemClock;
use oj_kv::{KvClient, RedisConfig};
use tower::ServiceExt;

fn redis_url() -> Option<String> {
    std::env::var("OJ_TEST_REDIS_URL").ok()
}

fn test_state() -> Option<Arc<AppState<SystemClock>>> {
    let _ = redis_url()?;
    let config = RedisConfig {
        host: std::env::var("OJ_TEST_REDIS_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
        port: 6379,
        password: String::new(),
        db: 0,
        namespace: "oj-ratelimit-test:".to_string(),
    };
    let kv = KvClient::new(&config).ok()?;
    Some(Arc::new(AppState::new(kv, SystemClock)))
}

#[tokio::test]
#[ignore = "requires a local redis instance; set OJ_TEST_REDIS_URL to run"]
async fn healthz_reports_store_ping() {
    let Some(state) = test_state() else { return };
    let app = build_router(state);

    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["ok"], true);
}

#[tokio::test]
#[ignore = "requires a local redis instance; set OJ_TEST_REDIS_URL to run"]
async fn ratelimit_rejects_malformed_body_with_400() {
    let Some(state) = test_state() else { return };
    let app = build_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/ratelimit")
                .header("content-type", "application/json")
                .body(Body::from("{\"id\": \"\", \"limit\": 1, \"windowMs\": 1000}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a local redis instance; set OJ_TEST_REDIS_URL to run"]
async fn ratelimit_allows_within_budget() {
    let Some(state) = test_state() else { return };
    let app = build_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/ratelimit")
                .header("content-type", "application/json")
                .body(Body::from(format!(
                    "{{\"id\": \"router-test-{}\", \"limit\": 5, \"windowMs\": 60000}}",
                    uuid::Uuid::new_v4()
                )))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["allow"], true);
}
