//! ondo-web - Personalized weather outfit recommendation service
//!
//! Fetches the current KMA forecast temperature, applies a per-user offset
//! from the ondo-ml predictor, maps the adjusted temperature to an outfit
//! recommendation, and records user feedback to the flat-file store.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ondo_common::config::WebConfig;
use ondo_web::{build_router, AppState};

/// Command-line arguments for ondo-web
#[derive(Parser, Debug)]
#[command(name = "ondo-web")]
#[command(about = "Personalized weather outfit recommendation service")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5810", env = "ONDO_WEB_PORT")]
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
                .unwrap_or_else(|_| "ondo_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command-line arguments
    let args = Args::parse();

    info!("Starting ONDO Web v{}", env!("CARGO_PKG_VERSION"));

    // All environment lookups happen here, once
    let config = WebConfig::from_env(args.feedback_path.as_deref());

    if config.kma_api_key.is_none() {
        tracing::warn!("KMA_API_KEY is not set; weather requests will fail until it is");
    }
    match &config.predictor_url {
        Some(url) => info!("Offset predictor: {}", url),
        None => info!("Offset predictor not configured; offsets default to 0"),
    }
    info!("Feedback file: {}", config.feedback_path.display());

    let state = AppState::new(config).context("Failed to initialize application state")?;
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("ondo-web listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
