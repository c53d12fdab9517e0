//! Configuration loading and feedback file resolution
//!
//! All environment lookups happen here, once, at startup. The services
//! receive a fully-built config struct and never touch `std::env` afterwards,
//! so tests can substitute any value.

use crate::Result;
use std::path::PathBuf;

/// KMA Village Forecast service root (endpoint path appended by the client)
pub const DEFAULT_KMA_BASE_URL: &str =
    "http://apis.data.go.kr/1360000/VilageFcstInfoService_2.0";

/// Seoul grid coordinates for the KMA forecast grid
pub const DEFAULT_GRID_NX: u16 = 60;
pub const DEFAULT_GRID_NY: u16 = 127;

/// Configuration for the ondo-web service
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Display label for the fixed forecast location
    pub region_label: String,
    /// KMA service key. Required for weather retrieval; a missing key is a
    /// configuration error surfaced when the weather endpoint is hit, not at
    /// startup.
    pub kma_api_key: Option<String>,
    /// KMA service root URL (overridable so tests can point at a local double)
    pub kma_base_url: String,
    pub grid_nx: u16,
    pub grid_ny: u16,
    /// Offset predictor root URL. Absent means personalization is off and
    /// every offset is a degraded zero.
    pub predictor_url: Option<String>,
    /// Path of the feedback JSON array file
    pub feedback_path: PathBuf,
}

impl WebConfig {
    /// Build the config from the process environment.
    ///
    /// `feedback_path_arg` is the command-line override, which takes priority
    /// over `ONDO_FEEDBACK_PATH`, the TOML config file, and the compiled
    /// default (in that order).
    pub fn from_env(feedback_path_arg: Option<&str>) -> Self {
        Self {
            region_label: std::env::var("ONDO_REGION").unwrap_or_else(|_| "서울".to_string()),
            kma_api_key: std::env::var("KMA_API_KEY").ok(),
            kma_base_url: std::env::var("KMA_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_KMA_BASE_URL.to_string()),
            grid_nx: DEFAULT_GRID_NX,
            grid_ny: DEFAULT_GRID_NY,
            predictor_url: std::env::var("ML_SERVER_URL").ok(),
            feedback_path: resolve_feedback_path(feedback_path_arg),
        }
    }
}

/// Configuration for the ondo-ml service
#[derive(Debug, Clone)]
pub struct MlConfig {
    /// Path of the feedback JSON array file (read-only for this service)
    pub feedback_path: PathBuf,
}

impl MlConfig {
    pub fn from_env(feedback_path_arg: Option<&str>) -> Self {
        Self {
            feedback_path: resolve_feedback_path(feedback_path_arg),
        }
    }
}

/// Feedback file resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. ONDO_FEEDBACK_PATH environment variable
/// 3. TOML config file (`feedback_path` key)
/// 4. `./feedback_db.json` relative to the working directory (fallback)
pub fn resolve_feedback_path(cli_arg: Option<&str>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var("ONDO_FEEDBACK_PATH") {
        return PathBuf::from(path);
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = locate_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(path) = config.get("feedback_path").and_then(|v| v.as_str()) {
                    return PathBuf::from(path);
                }
            }
        }
    }

    // Priority 4: Working-directory default (matches the original deployment)
    PathBuf::from("feedback_db.json")
}

/// Locate the platform config file: `~/.config/ondo/config.toml` first, then
/// `/etc/ondo/config.toml` on Linux.
fn locate_config_file() -> Result<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("ondo").join("config.toml"));

    if let Some(path) = user_config {
        if path.exists() {
            return Ok(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/ondo/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
    }

    Err(crate::Error::Config("No config file found".to_string()))
}
