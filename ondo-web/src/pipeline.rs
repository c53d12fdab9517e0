//! Recommendation pipeline
//!
//! Sequential weather → offset → rule-lookup computation producing one
//! recommendation response. The offset call strictly follows the weather
//! call because it takes the observed temperature as input.
//!
//! Failure policy: the weather leg is mandatory and its failures propagate;
//! the offset leg is enrichment and never fails (it degrades to zero inside
//! the client). No retries at this layer.

use crate::rules::{self, OutfitItem};
use crate::services::{KmaClient, OffsetClient};
use ondo_common::{Error, Result};
use serde::Serialize;

/// Response contract for GET /api/weather
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub region: String,
    pub current_temperature: f64,
    pub adjusted_temperature: f64,
    pub offset: f64,
    pub offset_degraded: bool,
    pub weather_status: String,
    pub recommendation: Vec<OutfitItem>,
}

/// Produce one recommendation for a user.
pub async fn recommend(
    kma: &KmaClient,
    offsets: &OffsetClient,
    region_label: &str,
    user_id: &str,
) -> Result<RecommendationResponse> {
    let reading = kma.fetch_current().await?;

    let current_temperature = reading
        .temperature
        .ok_or_else(|| Error::DataNotFound("no temperature in forecast payload".to_string()))?;

    let outcome = offsets.predict(user_id, current_temperature).await;
    let adjusted_temperature = current_temperature + outcome.value;

    let recommendation = rules::lookup(adjusted_temperature).to_vec();

    tracing::info!(
        user_id = %user_id,
        current = current_temperature,
        adjusted = adjusted_temperature,
        offset = outcome.value,
        degraded = outcome.degraded,
        "Recommendation computed"
    );

    Ok(RecommendationResponse {
        region: region_label.to_string(),
        current_temperature,
        adjusted_temperature,
        offset: outcome.value,
        offset_degraded: outcome.degraded,
        weather_status: reading.status_label,
        recommendation,
    })
}
