// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{required_var, ConfigError};

/// `DATABASE_URL` (spec §6.5), the Postgres connection string backing
/// `oj_storage::PostgresJobStore`.
pub fn database_url() -> Result<String, ConfigError> {
    required_var("DATABASE_URL")
}
