// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("failed to parse Traefik configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("no external IP could be resolved from any configured service")]
    ExternalIpUnavailable,

    #[error("no DNS zone found for domain {0:?}")]
    ZoneNotFound(String),

    #[error("DNS provider request failed: {0}")]
    Provider(String),

    #[error("DNS provider HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error persisting reconciler state: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReconcileError>;
