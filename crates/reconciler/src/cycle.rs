// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ties extraction, the liveness tick, the full convergence pass, and
//! persisted state together into one reconciler cycle — the Rust analogue
//! of `lightweight_check.py::main` dispatching into
//! `sync_cloudflare.py::sync_dns_records`.

use std::path::PathBuf;

use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::convergence::{run_full_pass, ReconcileReport};
use crate::error::Result;
use crate::extract::extract_hostnames;
use crate::fingerprint::{fingerprint, read_fingerprint, touch_health_timestamp, write_fingerprint};
use crate::ip_lookup::{resolve_external_ip, DEFAULT_IP_ECHO_SERVICES};
use crate::liveness::{needs_full_pass_for_fingerprint, probe_reserved_host};
use crate::provider::DnsProvider;

/// What one cycle actually did.
#[derive(Debug)]
pub enum CycleOutcome {
    /// Fingerprint unchanged and the helper host answered: nothing to do.
    Quiet,
    /// A full convergence pass ran; carries its report.
    FullPass(ReconcileReport),
}

/// File paths and DNS parameters a [`Reconciler`] needs.
#[derive(Debug, Clone)]
pub struct ReconcilerConfig {
    pub traefik_config_path: PathBuf,
    pub fingerprint_path: PathBuf,
    pub health_timestamp_path: PathBuf,
    pub base_domain: String,
}

/// Run one liveness-or-full-pass cycle.
pub async fn run_cycle(
    provider: &dyn DnsProvider,
    http: &reqwest::Client,
    config: &ReconcilerConfig,
    now: chrono::DateTime<chrono::Utc>,
) -> Result<CycleOutcome> {
    run_cycle_with_services(provider, http, config, DEFAULT_IP_ECHO_SERVICES, now).await
}

/// As [`run_cycle`] but with an explicit IP-echo service list, for tests.
pub async fn run_cycle_with_services(
    provider: &dyn DnsProvider,
    http: &reqwest::Client,
    config: &ReconcilerConfig,
    ip_services: &[&str],
    now: chrono::DateTime<chrono::Utc>,
) -> Result<CycleOutcome> {
    let contents = tokio::fs::read_to_string(&config.traefik_config_path).await?;
    let current_fingerprint = fingerprint(contents.as_bytes());
    let last_fingerprint = read_fingerprint(&config.fingerprint_path).await;

    let needs_full_pass = needs_full_pass_for_fingerprint(&current_fingerprint, last_fingerprint.as_deref());

    if !needs_full_pass {
        if probe_reserved_host(&config.base_domain).await {
            touch_health_timestamp(&config.health_timestamp_path, now).await?;
            return Ok(CycleOutcome::Quiet);
        }
        warn!("liveness probe failed against an unchanged configuration; running a full pass");
    } else {
        info!("Traefik configuration change detected, running full sync");
    }

    let hostnames = extract_hostnames(&contents)?;
    if hostnames.is_empty() {
        warn!("no hostnames found in the Traefik configuration; ensuring static DNS entries only");
    }

    let ip = resolve_external_ip(http, ip_services).await?;
    let report = run_full_pass(provider, &config.base_domain, &hostnames, &ip).await?;

    if report.succeeded {
        write_fingerprint(&config.fingerprint_path, &current_fingerprint).await?;
        touch_health_timestamp(&config.health_timestamp_path, now).await?;
    } else {
        error!(failures = ?report.failures, "full sync completed with per-record failures");
    }

    Ok(CycleOutcome::FullPass(report))
}

/// Runs [`run_cycle`] on a fixed interval until cancelled, mirroring
/// `oj_scheduler::sweeper::LeaseSweeper`'s run-until-cancelled shape.
pub struct Reconciler {
    provider: Box<dyn DnsProvider>,
    http: reqwest::Client,
    config: ReconcilerConfig,
    interval: std::time::Duration,
}

impl Reconciler {
    pub fn new(provider: Box<dyn DnsProvider>, config: ReconcilerConfig, interval: std::time::Duration) -> Self {
        Self { provider, http: reqwest::Client::new(), config, interval }
    }

    pub async fn run(&self, shutdown: CancellationToken) {
        let mut ticker = tokio::time::interval(self.interval);
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => return,
                _ = ticker.tick() => {
                    match run_cycle(self.provider.as_ref(), &self.http, &self.config, chrono::Utc::now()).await {
                        Ok(CycleOutcome::Quiet) => {}
                        Ok(CycleOutcome::FullPass(report)) if report.succeeded => {
                            info!("full sync completed successfully");
                        }
                        Ok(CycleOutcome::FullPass(_)) => {}
                        Err(err) => error!(error = %err, "reconciler cycle failed"),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "cycle_tests.rs"]
mod tests;
