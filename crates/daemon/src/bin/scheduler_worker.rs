// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One worker per supported job type (spec §4.1), a lease sweeper, and a
//! single Postgres pool / Redis client shared across all of them. Model
//! invocation is wired against the bundled in-memory runtimes (spec §1, §9
//! "External model calls": "a test fake in this repo; a real binding in a
//! deployment") — a real deployment replaces them with a binding to its own
//! ASR/diarization/TTS services.

use std::sync::Arc;

use oj_adapters::{
    DiarizationAdapter, FakeDiarizationRuntime, FakeTranscriptionRuntime, FakeTtsSynthesisRuntime,
    FakeTtsTrainingRuntime, StageAdapter, TranscriptionAdapter, TtsSynthesisAdapter,
    TtsTrainingAdapter,
};
use oj_core::{JobType, SystemClock};
use oj_daemon::config::{blob::BlobConfig, database, scheduler::SchedulerEnv, store_config};
use oj_kv::{KvClient, ProgressClient, QueueClient};
use oj_scheduler::progress_sink::{KvProgressSinkFactory, ProgressSinkFactory};
use oj_scheduler::{LeaseSweeper, Worker, WorkerConfig};
use oj_storage::{JobStore, PostgresJobStore};
use sqlx::postgres::PgPoolOptions;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    oj_daemon::logging::init("oj_daemon=info,oj_scheduler=info");

    let redis_config = match store_config() {
        Ok(cfg) => cfg,
        Err(err) => fatal(&err),
    };
    let database_url = match database::database_url() {
        Ok(url) => url,
        Err(err) => fatal(&err),
    };
    let scheduler_env = match SchedulerEnv::from_env() {
        Ok(env) => env,
        Err(err) => fatal(&err),
    };
    // Object storage is an out-of-scope collaborator; validated here only so
    // a missing variable is still a fatal boot error (spec §7 item 5).
    if let Err(err) = BlobConfig::from_env() {
        fatal(&err);
    }

    let kv = match KvClient::new(&redis_config) {
        Ok(kv) => kv,
        Err(err) => {
            error!(error = %err, "failed to construct key-value client");
            std::process::exit(1);
        }
    };
    let pool = match PgPoolOptions::new().max_connections(10).connect(&database_url).await {
        Ok(pool) => pool,
        Err(err) => {
            error!(error = %err, "failed to connect to database");
            std::process::exit(1);
        }
    };

    let store: Arc<dyn JobStore> = Arc::new(PostgresJobStore::new(pool));
    let queue = QueueClient::new(kv.clone());
    let progress: Arc<dyn ProgressSinkFactory> =
        Arc::new(KvProgressSinkFactory::new(ProgressClient::new(kv)));
    let lease_duration = chrono::Duration::seconds(scheduler_env.lease_seconds);
    let shutdown = CancellationToken::new();

    warn!(
        "model runtimes are not bound to a real ASR/diarization/TTS backend in this build; \
         running against the bundled in-memory placeholder runtimes"
    );

    let mut handles = Vec::new();

    handles.push(spawn_worker(
        format!("{}-transcription", scheduler_env.worker_id),
        vec![JobType::Transcription],
        lease_duration,
        Arc::new(TranscriptionAdapter::new(FakeTranscriptionRuntime::new(
            oj_adapters::TranscriptionResult {
                transcript_key: String::new(),
                language: String::new(),
                duration: 0.0,
                segment_count: 0,
                word_count: 0,
            },
        ))),
        store.clone(),
        queue.clone(),
        progress.clone(),
        shutdown.clone(),
    ));

    handles.push(spawn_worker(
        format!("{}-diarization", scheduler_env.worker_id),
        vec![JobType::Diarization],
        lease_duration,
        Arc::new(DiarizationAdapter::new(FakeDiarizationRuntime::new(
            oj_adapters::DiarizationResult {
                rttm_key: String::new(),
                segment_count: 0,
                speaker_count: 0,
                total_duration: 0.0,
                embedding_count: 0,
            },
        ))),
        store.clone(),
        queue.clone(),
        progress.clone(),
        shutdown.clone(),
    ));

    handles.push(spawn_worker(
        format!("{}-tts-synthesis", scheduler_env.worker_id),
        vec![JobType::TtsSynthesis],
        lease_duration,
        Arc::new(TtsSynthesisAdapter::new(FakeTtsSynthesisRuntime::new(
            oj_adapters::TtsSynthesisResult {
                output_key: String::new(),
                duration: 0.0,
                sample_rate: 0,
                quality_score: 0.0,
            },
        ))),
        store.clone(),
        queue.clone(),
        progress.clone(),
        shutdown.clone(),
    ));

    handles.push(spawn_worker(
        format!("{}-tts-training", scheduler_env.worker_id),
        vec![JobType::TtsTraining],
        lease_duration,
        Arc::new(TtsTrainingAdapter::new(FakeTtsTrainingRuntime::new(
            oj_adapters::TtsTrainingResult {
                model_key: String::new(),
                config_key: String::new(),
                training_duration: 0.0,
                quality_score: 0.0,
            },
        ))),
        store.clone(),
        queue.clone(),
        progress.clone(),
        shutdown.clone(),
    ));

    let sweeper_shutdown = shutdown.clone();
    let sweeper_store = store.clone();
    handles.push(tokio::spawn(async move {
        LeaseSweeper::new(sweeper_store, SystemClock, std::time::Duration::from_secs(30))
            .run(sweeper_shutdown)
            .await;
    }));

    info!(worker_id = %scheduler_env.worker_id, "scheduler-worker started");

    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to install ctrl-c handler; shutting down immediately");
    }
    info!("shutdown signal received, draining workers");
    shutdown.cancel();

    for handle in handles {
        let _ = handle.await;
    }
}

#[allow(clippy::too_many_arguments)]
fn spawn_worker(
    worker_id: String,
    job_types: Vec<JobType>,
    lease_duration: chrono::Duration,
    adapter: Arc<dyn StageAdapter>,
    store: Arc<dyn JobStore>,
    queue: QueueClient,
    progress: Arc<dyn ProgressSinkFactory>,
    shutdown: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    let config = WorkerConfig::new(job_types, lease_duration);
    tokio::spawn(async move {
        let worker = Worker::new(worker_id, config, store, queue, progress, adapter, SystemClock);
        worker.run(shutdown).await;
    })
}

fn fatal(err: &dyn std::fmt::Display) -> ! {
    error!(error = %err, "fatal configuration error");
    std::process::exit(1);
}
