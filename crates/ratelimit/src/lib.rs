// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! oj-ratelimit: the admission-control HTTP service (spec §6.1, §4.2).
//!
//! Wraps `oj_kv::RateLimiter` behind `GET /healthz` and `POST /ratelimit`,
//! mirroring the request/response shape and error taxonomy of the reference
//! Python service (`infrastructure/redis-ratelimiter/main.py`).

pub mod error;
pub mod handlers;
pub mod router;

pub use error::RateLimitError;
pub use router::build_router;

use oj_core::Clock;
use oj_kv::{KvClient, RateLimiter};

/// Shared state behind every handler in this service.
pub struct AppState<C: Clock> {
    pub limiter: RateLimiter,
    pub kv: KvClient,
    pub clock: C,
}

impl<C: Clock> AppState<C> {
    pub fn new(kv: KvClient, clock: C) -> Self {
        let limiter = RateLimiter::new(kv.clone());
        Self { limiter, kv, clock }
    }
}
