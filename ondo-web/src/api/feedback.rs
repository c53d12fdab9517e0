//! Feedback submission endpoint

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::AppState;
use ondo_common::types::{FeedbackEntry, FeedbackRating};

/// Request body for POST /api/feedback.
///
/// Every field is optional at the wire level so missing fields can be
/// rejected with 400 (presence checks by hand) instead of the extractor's
/// 422.
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub temp: Option<f64>,
    pub offset: Option<f64>,
    /// Raw value, decoded by hand so an unknown rating is a 400 as well
    pub feedback: Option<serde_json::Value>,
}

/// POST /api/feedback
///
/// Validates presence of all fields, stamps the entry server-side, and
/// appends it through the single-writer store. Nothing is written on a
/// validation failure.
pub async fn post_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<serde_json::Value>, FeedbackError> {
    let user_id = match request.user_id {
        Some(id) if !id.is_empty() => id,
        _ => return Err(FeedbackError::MissingField("userId")),
    };
    let temp = request.temp.ok_or(FeedbackError::MissingField("temp"))?;
    let offset = request.offset.ok_or(FeedbackError::MissingField("offset"))?;
    let feedback = request
        .feedback
        .ok_or(FeedbackError::MissingField("feedback"))?;
    let feedback: FeedbackRating =
        serde_json::from_value(feedback).map_err(|_| FeedbackError::InvalidRating)?;

    let entry = FeedbackEntry {
        user_id: user_id.clone(),
        temp,
        offset,
        feedback,
        timestamp: chrono::Utc::now().timestamp_millis(),
    };

    state
        .store
        .append(entry)
        .await
        .map_err(|e| FeedbackError::Persistence(e.to_string()))?;

    tracing::info!(user_id = %user_id, ?feedback, temp, "Feedback recorded");

    Ok(Json(json!({
        "message": "Feedback recorded successfully",
    })))
}

/// Feedback API errors
#[derive(Debug)]
pub enum FeedbackError {
    MissingField(&'static str),
    InvalidRating,
    Persistence(String),
}

impl IntoResponse for FeedbackError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            FeedbackError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                format!("Missing required field: {}", field),
            ),
            FeedbackError::InvalidRating => (
                StatusCode::BAD_REQUEST,
                "feedback must be one of hot, cold, just_right".to_string(),
            ),
            FeedbackError::Persistence(msg) => {
                tracing::error!("Feedback persistence failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to record feedback".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
