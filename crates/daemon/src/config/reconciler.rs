// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;
use std::time::Duration;

use oj_reconciler::ReconcilerConfig;

use super::{optional_int, optional_var, required_var, ConfigError};

/// Everything `dns-reconciler` needs besides the Cloudflare token itself:
/// the Traefik dynamic-config file to watch, where to persist the
/// fingerprint/health-timestamp files (spec §6.6), and the tick interval.
pub struct ReconcilerEnv {
    pub cycle: ReconcilerConfig,
    pub cloudflare_api_token: String,
    pub tick_interval: Duration,
}

impl ReconcilerEnv {
    /// `TRAEFIK_CONFIG_PATH` and `DOMAIN_BASE` are required; `RECONCILER_STATE_DIR`
    /// defaults to `/var/lib/oj-reconciler` and `RECONCILE_INTERVAL_SECS` to 60.
    pub fn from_env() -> Result<Self, ConfigError> {
        let traefik_config_path = PathBuf::from(required_var("TRAEFIK_CONFIG_PATH")?);
        let base_domain = required_var("DOMAIN_BASE")?;
        let cloudflare_api_token = required_var("CLOUDFLARE_API_TOKEN")?;
        let state_dir = PathBuf::from(optional_var("RECONCILER_STATE_DIR", "/var/lib/oj-reconciler"));
        let interval_secs: u64 = optional_int("RECONCILE_INTERVAL_SECS", 60)?;

        Ok(Self {
            cycle: ReconcilerConfig {
                traefik_config_path,
                fingerprint_path: state_dir.join("fingerprint"),
                health_timestamp_path: state_dir.join("health_timestamp"),
                base_domain,
            },
            cloudflare_api_token,
            tick_interval: Duration::from_secs(interval_secs),
        })
    }
}
