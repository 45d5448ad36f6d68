// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Drift-detection and convergence loop against the configured Cloudflare
//! zone (spec §4.3): a throttled liveness tick that escalates to a full
//! reconciliation pass whenever the Traefik configuration's fingerprint
//! changes or the reserved helper host stops answering.

use oj_daemon::config::reconciler::ReconcilerEnv;
use oj_reconciler::{CloudflareProvider, Reconciler};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    oj_daemon::logging::init("oj_daemon=info,oj_reconciler=info");

    let env = match ReconcilerEnv::from_env() {
        Ok(env) => env,
        Err(err) => fatal(&err),
    };

    let provider = Box::new(CloudflareProvider::new(env.cloudflare_api_token));
    let reconciler = Reconciler::new(provider, env.cycle, env.tick_interval);
    let shutdown = CancellationToken::new();

    info!(interval_secs = env.tick_interval.as_secs(), "dns-reconciler started");

    let shutdown_for_run = shutdown.clone();
    let run = tokio::spawn(async move { reconciler.run(shutdown_for_run).await });

    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to install ctrl-c handler; shutting down immediately");
    }
    info!("shutdown signal received");
    shutdown.cancel();
    if let Err(err) = run.await {
        error!(error = %err, "reconciler task panicked");
    }
}

fn fatal(err: &dyn std::fmt::Display) -> ! {
    error!(error = %err, "fatal configuration error");
    std::process::exit(1);
}
