//! KMA Village Forecast client
//!
//! Fetches the short-term forecast for a fixed grid coordinate and extracts
//! the current temperature (category `TMP`) and a sky-condition label
//! (category `SKY`). One request per pipeline invocation, no caching, no
//! retries.

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Timelike, Utc};
use ondo_common::config::WebConfig;
use ondo_common::{Error, Result};
use serde::Deserialize;

const REQUEST_TIMEOUT_SECS: u64 = 10;
const FORECAST_PATH: &str = "/getVilageFcst";

/// Valid base_time slots for the Village Forecast, in publication order
const BASE_SLOTS: [u32; 8] = [2, 5, 8, 11, 14, 17, 20, 23];

/// KMA publishes on KST wall-clock time, regardless of where this process runs
const KST_OFFSET_SECS: i32 = 9 * 3600;

/// One observed forecast reading. An absent temperature means the upstream
/// payload carried no `TMP` item; the pipeline escalates that to a request
/// failure.
#[derive(Debug, Clone)]
pub struct WeatherReading {
    pub temperature: Option<f64>,
    pub status_label: String,
}

// Wire shape of the KMA response; every level is optional because error
// payloads omit the body entirely.
#[derive(Debug, Deserialize)]
struct KmaEnvelope {
    response: Option<KmaResponse>,
}

#[derive(Debug, Deserialize)]
struct KmaResponse {
    body: Option<KmaBody>,
}

#[derive(Debug, Deserialize)]
struct KmaBody {
    items: Option<KmaItems>,
}

#[derive(Debug, Deserialize)]
struct KmaItems {
    item: Option<Vec<KmaItem>>,
}

#[derive(Debug, Deserialize)]
struct KmaItem {
    category: String,
    #[serde(rename = "fcstValue")]
    fcst_value: String,
}

/// KMA forecast API client
pub struct KmaClient {
    http_client: reqwest::Client,
    base_url: String,
    service_key: Option<String>,
    grid_nx: u16,
    grid_ny: u16,
}

impl KmaClient {
    pub fn new(config: &WebConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Upstream(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.kma_base_url.clone(),
            service_key: config.kma_api_key.clone(),
            grid_nx: config.grid_nx,
            grid_ny: config.grid_ny,
        })
    }

    /// Fetch the current forecast temperature for the configured grid.
    ///
    /// The service key is required: running without one fails here rather
    /// than issuing an unauthenticated call that the upstream rejects less
    /// legibly.
    pub async fn fetch_current(&self) -> Result<WeatherReading> {
        let service_key = self
            .service_key
            .as_deref()
            .ok_or_else(|| Error::Config("KMA_API_KEY is not set".to_string()))?;

        let (base_date, base_time) = base_slot(kst(Utc::now()));
        let url = format!("{}{}", self.base_url, FORECAST_PATH);
        let nx = self.grid_nx.to_string();
        let ny = self.grid_ny.to_string();

        tracing::debug!(base_date = %base_date, base_time = %base_time, "Querying KMA forecast");

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("serviceKey", service_key),
                ("pageNo", "1"),
                ("numOfRows", "100"),
                ("dataType", "JSON"),
                ("base_date", base_date.as_str()),
                ("base_time", base_time.as_str()),
                ("nx", nx.as_str()),
                ("ny", ny.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("KMA request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream(format!("KMA returned HTTP {}", status)));
        }

        let envelope: KmaEnvelope = response
            .json()
            .await
            .map_err(|e| Error::Upstream(format!("KMA payload parse failed: {}", e)))?;

        Ok(extract_reading(envelope))
    }
}

/// Pick out temperature and sky condition from the decoded payload.
///
/// A missing or unparsable `TMP` item yields an unset temperature and an
/// error status label; this layer does not raise for it.
fn extract_reading(envelope: KmaEnvelope) -> WeatherReading {
    let items = envelope
        .response
        .and_then(|r| r.body)
        .and_then(|b| b.items)
        .and_then(|i| i.item)
        .unwrap_or_default();

    let temperature = items
        .iter()
        .find(|item| item.category == "TMP")
        .and_then(|item| item.fcst_value.parse::<f64>().ok());

    if temperature.is_none() {
        tracing::error!("No temperature entry in KMA response");
        return WeatherReading {
            temperature: None,
            status_label: "데이터 오류".to_string(),
        };
    }

    let status_label = items
        .iter()
        .find(|item| item.category == "SKY")
        .map(|item| sky_label(item.fcst_value.trim()))
        .unwrap_or("맑음")
        .to_string();

    WeatherReading {
        temperature,
        status_label,
    }
}

/// KMA sky-condition code to label
fn sky_label(code: &str) -> &'static str {
    match code {
        "1" => "맑음",
        "3" => "구름많음",
        "4" => "흐림",
        _ => "맑음",
    }
}

/// Convert host time to KST before slot selection. Selecting a slot from
/// the host's own timezone would request slots KMA has not published yet on
/// hosts east of KST, and stale ones west of it.
fn kst(now: DateTime<Utc>) -> DateTime<FixedOffset> {
    now.with_timezone(&FixedOffset::east_opt(KST_OFFSET_SECS).expect("KST offset is valid"))
}

/// Compute the base_date / base_time pair for "now": the most recent
/// published slot (02, 05, 08, 11, 14, 17, 20, 23 hundred hours), rolling
/// over to the previous day's 2300 slot before 02:00.
fn base_slot<Tz: TimeZone>(now: DateTime<Tz>) -> (String, String)
where
    Tz::Offset: std::fmt::Display,
{
    let hour = now.hour();

    let slot = BASE_SLOTS.iter().rev().find(|&&s| hour >= s).copied();

    match slot {
        Some(s) => (now.format("%Y%m%d").to_string(), format!("{:02}00", s)),
        None => {
            let yesterday = now - Duration::days(1);
            (yesterday.format("%Y%m%d").to_string(), "2300".to_string())
        }
    }
}
