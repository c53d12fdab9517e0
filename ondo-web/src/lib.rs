//! ondo-web library - personalized weather outfit recommendation service
//!
//! Pipeline: KMA forecast fetch → per-user offset correction → rule-table
//! lookup → assembled response. Feedback submissions are appended to the
//! flat-file store independently of the pipeline.

use axum::Router;
use std::sync::Arc;

use ondo_common::config::WebConfig;
use ondo_common::Result;

pub mod api;
pub mod pipeline;
pub mod rules;
pub mod services;
pub mod store;

use services::{KmaClient, OffsetClient};
use store::FeedbackStore;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<WebConfig>,
    pub kma: Arc<KmaClient>,
    pub offsets: Arc<OffsetClient>,
    pub store: Arc<FeedbackStore>,
}

impl AppState {
    /// Build state from a fully-resolved config: clients and the feedback
    /// store are constructed once and injected into every handler.
    pub fn new(config: WebConfig) -> Result<Self> {
        let kma = KmaClient::new(&config)?;
        let offsets = OffsetClient::new(&config);
        let store = FeedbackStore::new(config.feedback_path.clone());

        Ok(Self {
            config: Arc::new(config),
            kma: Arc::new(kma),
            offsets: Arc::new(offsets),
            store: Arc::new(store),
        })
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};
    use tower_http::trace::TraceLayer;

    Router::new()
        .route("/api/weather", get(api::get_weather))
        .route("/api/feedback", post(api::post_feedback))
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
