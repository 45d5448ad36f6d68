// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `GET /healthz` and `POST /ratelimit` (spec §6.1).

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::Json;
use oj_core::Clock;
use oj_kv::{Algorithm, RateLimitDecision};
use serde::{Deserialize, Serialize};

use crate::error::RateLimitError;
use crate::AppState;

/// 2 s operation budget for a whole `check` call (spec §4.2).
const OPERATION_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Deserialize)]
pub struct RatelimitRequest {
    pub id: String,
    pub limit: i64,
    #[serde(rename = "windowMs")]
    pub window_ms: i64,
    pub algo: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RatelimitResponse {
    pub allow: bool,
    pub limit: u64,
    pub remaining: u64,
    pub reset: i64,
    #[serde(rename = "retryAfter", skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<i64>,
}

impl From<RateLimitDecision> for RatelimitResponse {
    fn from(d: RateLimitDecision) -> Self {
        Self { allow: d.allow, limit: d.limit, remaining: d.remaining, reset: d.reset, retry_after: d.retry_after }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// `GET /healthz` — 200 always; body reports the store-ping result
/// (spec §6.1, §4.2 "Health endpoint").
pub async fn healthz<C: Clock + 'static>(State(state): State<Arc<AppState<C>>>) -> Json<HealthResponse> {
    let ok = state.kv.ping().await;
    Json(HealthResponse { ok })
}

/// `POST /ratelimit`.
pub async fn check_ratelimit<C: Clock + 'static>(
    State(state): State<Arc<AppState<C>>>,
    Json(req): Json<RatelimitRequest>,
) -> Result<Json<RatelimitResponse>, RateLimitError> {
    let algo = validate(&req)?;
    let now_ms = state.clock.epoch_ms() as i64;

    let decision = tokio::time::timeout(
        OPERATION_TIMEOUT,
        state.limiter.check(&req.id, req.limit as u64, req.window_ms, algo, now_ms),
    )
    .await
    .map_err(|_| RateLimitError::Timeout)??;

    Ok(Json(decision.into()))
}

/// Input validation (spec §4.2: "Invalid inputs yield a client-visible
/// validation error; they never mutate state"). Pure, so it can be checked
/// without a store.
fn validate(req: &RatelimitRequest) -> Result<Algorithm, RateLimitError> {
    if req.id.trim().is_empty() {
        return Err(RateLimitError::Validation("id must be non-empty".to_string()));
    }
    if req.limit < 1 {
        return Err(RateLimitError::Validation("limit must be >= 1".to_string()));
    }
    if req.window_ms < 1 {
        return Err(RateLimitError::Validation("windowMs must be >= 1".to_string()));
    }
    match req.algo.as_deref() {
        None | Some("sliding") => Ok(Algorithm::Sliding),
        Some("fixed") => Ok(Algorithm::Fixed),
        Some(other) => Err(RateLimitError::Validation(format!("unsupported algo: {other}"))),
    }
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
