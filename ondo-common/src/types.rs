//! Wire types shared between the web service and the offset predictor

use serde::{Deserialize, Serialize};

/// User's post-hoc rating of a recommendation's accuracy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackRating {
    Hot,
    Cold,
    JustRight,
}

/// One recorded feedback event. Immutable once written.
///
/// Field names follow the persisted JSON contract (camelCase userId,
/// epoch-millis timestamp).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub temp: f64,
    pub offset: f64,
    pub feedback: FeedbackRating,
    /// Epoch milliseconds, assigned server-side at submission time
    pub timestamp: i64,
}

/// Request body for POST /predict_offset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "currentTemp")]
    pub current_temp: f64,
}

/// Response body from POST /predict_offset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "temperatureOffset")]
    pub temperature_offset: f64,
}
