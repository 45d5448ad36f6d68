// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{optional_int, ConfigError};

/// `PORT` (spec §6.5), defaulting to 8000 as
/// `infrastructure/redis-ratelimiter/main.py` does.
pub fn port() -> Result<u16, ConfigError> {
    optional_int("PORT", 8000)
}
