//! ondo-ml library - offset predictor service
//!
//! Computes per-user temperature offsets from the recorded feedback history.
//! Reads the feedback file fresh on every prediction; never writes it.

use axum::Router;
use std::sync::Arc;

use ondo_common::config::MlConfig;

pub mod api;
pub mod model;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<MlConfig>,
}

impl AppState {
    pub fn new(config: MlConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::post;
    use tower_http::trace::TraceLayer;

    Router::new()
        .route("/predict_offset", post(api::predict_offset))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
