// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failure taxonomy for `POST /ratelimit` (spec §6.1, §7).
#[derive(Debug, Error)]
pub enum RateLimitError {
    /// Missing id / malformed JSON / unsupported algo -> 400.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The whole call exceeded the 2 s operation budget -> 504.
    #[error("rate limit check timed out")]
    Timeout,

    /// The underlying store rejected or failed the operation.
    #[error("store error: {0}")]
    Store(#[from] oj_kv::KvError),
}

impl IntoResponse for RateLimitError {
    fn into_response(self) -> Response {
        let status = match &self {
            RateLimitError::Validation(_) => StatusCode::BAD_REQUEST,
            RateLimitError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            RateLimitError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}
