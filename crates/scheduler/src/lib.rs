// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! oj-scheduler: priority-aware job pulling, the claim protocol, progress
//! reporting, terminal-state recording, and the lease sweeper (spec §4.1,
//! §5).

pub mod enqueue;
pub mod error;
pub mod progress_sink;
pub mod queue_scan;
pub mod sweeper;
pub mod worker;

pub use enqueue::enqueue;
pub use error::SchedulerError;
pub use progress_sink::KvProgressSink;
pub use queue_scan::worker_scan_keys;
pub use sweeper::{sweep_stale_jobs, LeaseSweeper};
pub use worker::{Worker, WorkerConfig};
