// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP surface for the rate limiter service (spec §6.1): `GET /healthz`
//! and `POST /ratelimit`, backed by the shared Redis key-value store.

use std::sync::Arc;

use oj_core::SystemClock;
use oj_daemon::config::{server, store_config};
use oj_kv::KvClient;
use oj_ratelimit::{build_router, AppState};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    oj_daemon::logging::init("oj_daemon=info,oj_ratelimit=info");

    let redis_config = match store_config() {
        Ok(cfg) => cfg,
        Err(err) => fatal(&err),
    };
    let port = match server::port() {
        Ok(port) => port,
        Err(err) => fatal(&err),
    };

    let kv = match KvClient::new(&redis_config) {
        Ok(kv) => kv,
        Err(err) => {
            error!(error = %err, "failed to construct key-value client");
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState::new(kv, SystemClock));
    let app = build_router(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(error = %err, %addr, "failed to bind HTTP listener");
            std::process::exit(1);
        }
    };

    info!(%addr, "ratelimit-server listening");

    if let Err(err) = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await {
        error!(error = %err, "ratelimit-server exited with error");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to install ctrl-c handler");
    }
}

fn fatal(err: &dyn std::fmt::Display) -> ! {
    error!(error = %err, "fatal configuration error");
    std::process::exit(1);
}
