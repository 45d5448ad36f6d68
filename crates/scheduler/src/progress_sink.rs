// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bridges [`oj_adapters::ProgressSink`] (what an adapter reports through)
//! to [`oj_kv::ProgressClient`] (the `job:<id>` hash a worker writes to).

use async_trait::async_trait;
use oj_adapters::ProgressSink;
use oj_core::JobId;
use oj_kv::ProgressClient;
use tracing::warn;

/// Builds a per-job [`ProgressSink`]. Exists so [`crate::worker::Worker`]
/// can be driven in tests without a live key-value store backing progress
/// writes.
pub trait ProgressSinkFactory: Send + Sync {
    fn for_job(&self, job_id: JobId) -> Box<dyn ProgressSink + Send + Sync>;
}

/// A `job:<id>` progress sink for a single claimed job. Report failures are
/// logged and swallowed: progress is advisory, not durable (spec §4.1).
pub struct KvProgressSink {
    client: ProgressClient,
    job_id: JobId,
}

impl KvProgressSink {
    pub fn new(client: ProgressClient, job_id: JobId) -> Self {
        Self { client, job_id }
    }
}

#[async_trait]
impl ProgressSink for KvProgressSink {
    async fn report(&self, pct: u8, message: &str) {
        if let Err(err) = self.client.report(self.job_id, pct, message).await {
            warn!(job_id = %self.job_id, error = %err, "progress report dropped");
        }
    }
}

/// [`ProgressSinkFactory`] backed by a live [`ProgressClient`]; the
/// production wiring.
#[derive(Clone)]
pub struct KvProgressSinkFactory {
    client: ProgressClient,
}

impl KvProgressSinkFactory {
    pub fn new(client: ProgressClient) -> Self {
        Self { client }
    }
}

impl ProgressSinkFactory for KvProgressSinkFactory {
    fn for_job(&self, job_id: JobId) -> Box<dyn ProgressSink + Send + Sync> {
        Box::new(KvProgressSink::new(self.client.clone(), job_id))
    }
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::ProgressSinkFactory;
    use oj_adapters::{NullProgressSink, ProgressSink};
    use oj_core::JobId;

    /// A factory that hands out a sink discarding every report, for tests
    /// that don't need a live key-value store.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct NullProgressSinkFactory;

    impl ProgressSinkFactory for NullProgressSinkFactory {
        fn for_job(&self, _job_id: JobId) -> Box<dyn ProgressSink + Send + Sync> {
            Box::new(NullProgressSink)
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::NullProgressSinkFactory;
