//! Offset prediction endpoint

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::model;
use crate::AppState;
use ondo_common::feedback_file;
use ondo_common::types::PredictResponse;

/// Request body for POST /predict_offset.
///
/// `currentTemp` is required (presence-checked by hand for a 400); the
/// current model does not use it, but the contract reserves it for
/// temperature-aware models. A missing userId predicts for "anonymous".
#[derive(Debug, Deserialize)]
pub struct PredictBody {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    #[serde(rename = "currentTemp")]
    pub current_temp: Option<f64>,
}

/// POST /predict_offset
///
/// Reads the feedback collection fresh and folds the user's history into a
/// personalization offset.
pub async fn predict_offset(
    State(state): State<AppState>,
    Json(body): Json<PredictBody>,
) -> Result<Json<PredictResponse>, PredictError> {
    let current_temp = body.current_temp.ok_or(PredictError::MissingCurrentTemp)?;
    let user_id = body.user_id.unwrap_or_else(|| "anonymous".to_string());

    let entries = feedback_file::read_entries(&state.config.feedback_path);
    let offset = model::personal_offset(&entries, &user_id);

    tracing::info!(
        user_id = %user_id,
        current_temp,
        entries = entries.len(),
        offset,
        "Offset predicted"
    );

    Ok(Json(PredictResponse {
        user_id,
        temperature_offset: offset,
    }))
}

/// Prediction API errors
#[derive(Debug)]
pub enum PredictError {
    MissingCurrentTemp,
}

impl IntoResponse for PredictError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            PredictError::MissingCurrentTemp => {
                (StatusCode::BAD_REQUEST, "currentTemp is required".to_string())
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
