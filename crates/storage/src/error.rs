// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors raised by a [`crate::JobStore`] implementation.
#[derive(Debug, Error)]
pub enum JobStoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to (de)serialize job payload: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("job {0} not found")]
    NotFound(oj_core::JobId),

    #[error("invalid enum value in job row: {0}")]
    InvalidEnumValue(#[from] oj_core::ParseEnumError),
}

pub type Result<T> = std::result::Result<T, JobStoreError>;
