// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Environment-driven configuration for the three `oj-daemon` binaries,
//! following `STORE_*` conventions already read by [`oj_kv::RedisConfig`]
//! and the rest of spec §6.5's variable names. Small free functions per
//! concern, same shape as the key-value crate's own `config.rs`.

pub mod blob;
pub mod database;
pub mod reconciler;
pub mod scheduler;
pub mod server;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Store(#[from] oj_kv::ConfigError),

    #[error("{0} environment variable is required")]
    MissingRequired(&'static str),

    #[error("{0} must be an integer, got {1:?}")]
    InvalidInteger(&'static str, String),
}

/// Load the shared `STORE_*` Redis settings (spec §6.5).
pub fn store_config() -> Result<oj_kv::RedisConfig, ConfigError> {
    Ok(oj_kv::RedisConfig::from_env()?)
}

pub(crate) fn required_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingRequired(name))
}

pub(crate) fn optional_var(name: &str, default: impl Into<String>) -> String {
    std::env::var(name).unwrap_or_else(|_| default.into())
}

pub(crate) fn optional_int<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match std::env::var(name) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidInteger(name, raw)),
        Err(_) => Ok(default),
    }
}
