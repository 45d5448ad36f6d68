// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Environment-driven configuration for the key-value store connection.
//!
//! Required variables fail boot fast (spec §7's "fatal boot errors"); optional
//! ones fall back to sane defaults, following the free-function convention in
//! the daemon's own `env.rs`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    MissingRequired(&'static str),

    #[error("{0} must be an integer, got {1:?}")]
    InvalidInteger(&'static str, String),
}

/// Redis connection settings for queues, progress records, and rate limiting.
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    pub password: String,
    pub db: i64,
    pub namespace: String,
}

impl RedisConfig {
    /// Load from environment: `STORE_HOST`/`STORE_PASSWORD` are required;
    /// `STORE_PORT` (6379), `STORE_DB` (0), `STORE_NAMESPACE` ("ratelimit:")
    /// fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = required_var("STORE_HOST")?;
        let password = required_var("STORE_PASSWORD")?;
        let port = optional_int("STORE_PORT", 6379)?;
        let db = optional_int("STORE_DB", 0)?;
        let namespace =
            std::env::var("STORE_NAMESPACE").unwrap_or_else(|_| "ratelimit:".to_string());
        Ok(Self { host, port, password, db, namespace })
    }

    /// Build the `redis://` connection URL.
    pub fn connection_url(&self) -> String {
        format!("redis://:{}@{}:{}/{}", self.password, self.host, self.port, self.db)
    }

    /// Namespace a bare key, e.g. `"x"` -> `"ratelimit:x"`.
    pub fn namespaced(&self, key: &str) -> String {
        format!("{}{}", self.namespace, key)
    }
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingRequired(name))
}

fn optional_int<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match std::env::var(name) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidInteger(name, raw)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
