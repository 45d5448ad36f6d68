// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Thin wrapper over a `redis::Client`, providing namespacing and a health check.

use crate::config::RedisConfig;
use crate::error::Result;
use redis::aio::MultiplexedConnection;

/// Shared handle to the key-value store. Cheap to clone (wraps `redis::Client`,
/// which internally shares connection state), matching the multiplexed-connection
/// convention used for Redis access across the pack.
#[derive(Clone)]
pub struct KvClient {
    pub(crate) client: redis::Client,
    pub(crate) namespace: String,
}

impl KvClient {
    pub fn new(config: &RedisConfig) -> Result<Self> {
        let client = redis::Client::open(config.connection_url())?;
        Ok(Self { client, namespace: config.namespace.clone() })
    }

    pub(crate) async fn connection(&self) -> Result<MultiplexedConnection> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }

    pub(crate) fn key(&self, suffix: &str) -> String {
        format!("{}{}", self.namespace, suffix)
    }

    /// `GET /healthz` semantics: OK iff a ping round-trip succeeds.
    pub async fn ping(&self) -> bool {
        let Ok(mut conn) = self.connection().await else {
            return false;
        };
        redis::cmd("PING").query_async::<_, String>(&mut conn).await.is_ok()
    }
}
