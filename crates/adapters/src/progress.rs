// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Progress side-channel handed to a [`crate::stage::StageAdapter`] (spec §4.1).

use async_trait::async_trait;

/// Sink an adapter reports incremental progress to.
///
/// Progress reports are advisory, not durable (spec §4.1): a sink
/// implementation may drop a report (e.g. a transient key-value store write
/// failure) without the adapter treating that as job failure.
#[async_trait]
pub trait ProgressSink: Send + Sync {
    /// Report `pct` (0-100) complete with a human-readable `message`.
    async fn report(&self, pct: u8, message: &str);
}

/// A sink that discards every report. Used by tests and by callers that
/// don't care to observe progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgressSink;

#[async_trait]
impl ProgressSink for NullProgressSink {
    async fn report(&self, _pct: u8, _message: &str) {}
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::ProgressSink;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// A single recorded progress report.
    #[derive(Debug, Clone, PartialEq)]
    pub struct ProgressReport {
        pub pct: u8,
        pub message: String,
    }

    /// Records every report for inspection in tests.
    #[derive(Clone, Default)]
    pub struct RecordingProgressSink {
        reports: Arc<Mutex<Vec<ProgressReport>>>,
    }

    impl RecordingProgressSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reports(&self) -> Vec<ProgressReport> {
            self.reports.lock().clone()
        }
    }

    #[async_trait]
    impl ProgressSink for RecordingProgressSink {
        async fn report(&self, pct: u8, message: &str) {
            self.reports.lock().push(ProgressReport { pct, message: message.to_string() });
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{ProgressReport, RecordingProgressSink};
