// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sliding-window and fixed-window rate limiting (spec §4.2), grounded 1:1 on
//! the reference `_sliding_window`/fixed-window handler: trim-then-count
//! sorted-set pipeline for sliding, `INCR`+`PEXPIRE` pipeline for fixed.

use crate::client::KvClient;
use crate::error::Result;
use redis::AsyncCommands;

/// Which windowing algorithm to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Sliding,
    Fixed,
}

/// Result of a single `check` call (spec §4.2 public contract).
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitDecision {
    pub allow: bool,
    pub limit: u64,
    pub remaining: u64,
    pub reset: i64,
    pub retry_after: Option<i64>,
}

#[derive(Clone)]
pub struct RateLimiter {
    kv: KvClient,
}

impl RateLimiter {
    pub fn new(kv: KvClient) -> Self {
        Self { kv }
    }

    /// `check(id, limit, windowMs, algo)` (spec §4.2).
    ///
    /// `now_ms` is passed in rather than read from the system clock so
    /// callers can drive deterministic boundary tests.
    pub async fn check(
        &self,
        id: &str,
        limit: u64,
        window_ms: i64,
        algo: Algorithm,
        now_ms: i64,
    ) -> Result<RateLimitDecision> {
        match algo {
            Algorithm::Sliding => self.sliding_window(id, limit, window_ms, now_ms).await,
            Algorithm::Fixed => self.fixed_window(id, limit, window_ms, now_ms).await,
        }
    }

    async fn sliding_window(
        &self,
        id: &str,
        limit: u64,
        window_ms: i64,
        now_ms: i64,
    ) -> Result<RateLimitDecision> {
        let mut conn = self.kv.connection().await?;
        let key = self.kv.key(id);

        let count: i64 = redis::pipe()
            .zrembyscore(&key, 0, now_ms - window_ms)
            .ignore()
            .zcard(&key)
            .query_async(&mut conn)
            .await?;
        let count = count as u64;

        if count >= limit {
            let oldest: Vec<(String, f64)> = conn.zrange_withscores(&key, 0, 0).await?;
            let reset = oldest.first().map(|(_, score)| *score as i64 + window_ms).unwrap_or(now_ms + window_ms);
            let retry_after = ((reset - now_ms) as f64 / 1000.0).ceil().max(0.0) as i64;
            return Ok(RateLimitDecision {
                allow: false,
                limit,
                remaining: 0,
                reset,
                retry_after: Some(retry_after),
            });
        }

        let member = format!("{now_ms}-{}", uuid::Uuid::new_v4());
        let (): () = redis::pipe()
            .zadd(&key, &member, now_ms)
            .ignore()
            .pexpire(&key, window_ms + 60_000)
            .ignore()
            .query_async(&mut conn)
            .await?;

        let remaining = limit.saturating_sub(count + 1);
        let oldest: Vec<(String, f64)> = conn.zrange_withscores(&key, 0, 0).await?;
        let reset = oldest.first().map(|(_, score)| *score as i64 + window_ms).unwrap_or(now_ms + window_ms);

        Ok(RateLimitDecision { allow: true, limit, remaining, reset, retry_after: None })
    }

    async fn fixed_window(
        &self,
        id: &str,
        limit: u64,
        window_ms: i64,
        now_ms: i64,
    ) -> Result<RateLimitDecision> {
        let mut conn = self.kv.connection().await?;
        let bucket = now_ms / window_ms;
        let key = self.kv.key(&format!("fw:{id}:{bucket}"));

        let value: i64 = redis::pipe()
            .incr(&key, 1)
            .pexpire(&key, window_ms)
            .ignore()
            .query_async(&mut conn)
            .await?;
        let value = value as u64;

        let allow = value <= limit;
        let remaining = if allow { limit.saturating_sub(value) } else { 0 };
        let reset = (bucket + 1) * window_ms;
        let retry_after =
            if allow { None } else { Some(((reset - now_ms) as f64 / 1000.0).ceil().max(0.0) as i64) };

        Ok(RateLimitDecision { allow, limit, remaining, reset, retry_after })
    }
}

#[cfg(test)]
#[path = "ratelimit_tests.rs"]
mod tests;
