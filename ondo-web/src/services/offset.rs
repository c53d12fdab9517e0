//! Offset predictor client
//!
//! Best-effort call to the offset predictor service. Personalization is
//! additive enrichment: every failure path degrades to a zero offset so the
//! recommendation pipeline always has a usable temperature. Degradation is
//! tagged with a reason so callers and tests can tell "no personalization
//! configured" apart from "predictor failed".

use ondo_common::config::WebConfig;
use ondo_common::types::{PredictRequest, PredictResponse};
use std::time::Duration;
use tracing::warn;

const REQUEST_TIMEOUT_SECS: u64 = 10;
const PREDICT_PATH: &str = "/predict_offset";

/// Result of an offset prediction. Never an error: `degraded` marks the
/// zero-fallback paths and `reason` says which one was taken.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetOutcome {
    pub value: f64,
    pub degraded: bool,
    pub reason: Option<String>,
}

impl OffsetOutcome {
    fn degraded(reason: impl Into<String>) -> Self {
        Self {
            value: 0.0,
            degraded: true,
            reason: Some(reason.into()),
        }
    }
}

/// Offset predictor API client
pub struct OffsetClient {
    http_client: reqwest::Client,
    base_url: Option<String>,
}

impl OffsetClient {
    pub fn new(config: &WebConfig) -> Self {
        // Client construction cannot realistically fail with these settings;
        // fall back to the default client rather than poisoning startup.
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            http_client,
            base_url: config.predictor_url.clone(),
        }
    }

    /// Predict the per-user temperature offset for the observed temperature.
    pub async fn predict(&self, user_id: &str, current_temp: f64) -> OffsetOutcome {
        let base_url = match &self.base_url {
            Some(url) => url,
            None => {
                warn!("ML_SERVER_URL is not set; using zero offset");
                return OffsetOutcome::degraded("predictor URL not configured");
            }
        };

        let endpoint = format!("{}{}", base_url, PREDICT_PATH);
        let request = PredictRequest {
            user_id: user_id.to_string(),
            current_temp,
        };

        let response = match self.http_client.post(&endpoint).json(&request).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Offset predictor unreachable: {}", e);
                return OffsetOutcome::degraded(format!("predictor unreachable: {}", e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("Offset predictor returned HTTP {}", status);
            return OffsetOutcome::degraded(format!("predictor returned HTTP {}", status));
        }

        match response.json::<PredictResponse>().await {
            Ok(body) => {
                tracing::debug!(
                    user_id = %user_id,
                    offset = body.temperature_offset,
                    "Offset prediction received"
                );
                OffsetOutcome {
                    value: body.temperature_offset,
                    degraded: false,
                    reason: None,
                }
            }
            Err(e) => {
                warn!("Offset predictor payload parse failed: {}", e);
                OffsetOutcome::degraded(format!("predictor payload invalid: {}", e))
            }
        }
    }
}
