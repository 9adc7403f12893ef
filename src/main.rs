//! highscore - Local leaderboard service
//!
//! Records racing/game completion times, lets an operator attach a name and
//! phone number to a pending time, and maintains a top-10 leaderboard
//! persisted to a JSON state file. Serves a small polling web UI.

use anyhow::Result;
use clap::Parser;
use highscore::config::Args;
use highscore::store::Store;
use highscore::{build_router, AppState, ScoreService};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting highscore v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let data_folder = args.resolve_data_folder();
    std::fs::create_dir_all(&data_folder)?;

    let state_file = args.state_file_path();
    info!("State file: {}", state_file.display());

    let service = ScoreService::open(Store::new(state_file))?;

    let state = AppState::new(Arc::new(service));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port)).await?;
    info!("highscore listening on http://{}:{}", args.host, args.port);
    info!("Health check: http://{}:{}/health", args.host, args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
