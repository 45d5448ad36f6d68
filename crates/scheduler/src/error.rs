// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("storage error: {0}")]
    Storage(#[from] oj_storage::JobStoreError),
    #[error("queue error: {0}")]
    Queue(#[from] oj_kv::KvError),
}
