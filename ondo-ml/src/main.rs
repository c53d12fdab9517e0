//! ondo-ml - Offset predictor service
//!
//! Serves per-user temperature offsets derived from the feedback history
//! recorded by ondo-web. The two services share the feedback file; this one
//! only ever reads it.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ondo_common::config::MlConfig;
use ondo_ml::{build_router, AppState};

/// Command-line arguments for ondo-ml
#[derive(Parser, Debug)]
#[command(name = "ondo-ml")]
#[command(about = "Offset predictor service for ONDO")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5815", env = "ONDO_ML_PORT")]
    port: u16,

    /// Feedback database file (overrides ONDO_FEEDBACK_PATH and config file)
    #[arg(short, long)]
    feedback_path: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ondo_ml=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!("Starting ONDO Offset Predictor v{}", env!("CARGO_PKG_VERSION"));

    let config = MlConfig::from_env(args.feedback_path.as_deref());
    info!("Feedback file: {}", config.feedback_path.display());

    let state = AppState::new(config);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("ondo-ml listening on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
