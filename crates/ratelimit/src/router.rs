// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use oj_core::Clock;

use crate::handlers::{check_ratelimit, healthz};
use crate::AppState;

/// Build the rate-limiter HTTP surface: `GET /healthz`, `POST /ratelimit`.
pub fn build_router<C: Clock + 'static>(state: Arc<AppState<C>>) -> Router {
    Router::new()
        .route("/healthz", get(healthz::<C>))
        .route("/ratelimit", post(check_ratelimit::<C>))
        .with_state(state)
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
