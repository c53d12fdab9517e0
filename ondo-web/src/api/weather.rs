//! Weather recommendation endpoint

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::pipeline::{self, RecommendationResponse};
use crate::AppState;
use ondo_common::Error;

/// Query parameters for GET /api/weather
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// GET /api/weather?userId=<id>
///
/// Runs the full recommendation pipeline for one user. Weather-side
/// failures (missing credential, unreachable upstream, payload without a
/// temperature) are 500; a missing userId is 400.
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<RecommendationResponse>, WeatherError> {
    let user_id = match query.user_id.as_deref() {
        Some(id) if !id.is_empty() => id,
        _ => return Err(WeatherError::MissingUserId),
    };

    let response = pipeline::recommend(
        &state.kma,
        &state.offsets,
        &state.config.region_label,
        user_id,
    )
    .await
    .map_err(WeatherError::Pipeline)?;

    Ok(Json(response))
}

/// Weather API errors
#[derive(Debug)]
pub enum WeatherError {
    MissingUserId,
    Pipeline(Error),
}

impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            WeatherError::MissingUserId => (
                StatusCode::BAD_REQUEST,
                "userId query parameter is required".to_string(),
            ),
            WeatherError::Pipeline(e) => {
                tracing::error!("Weather pipeline failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "날씨 데이터를 가져올 수 없습니다.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
