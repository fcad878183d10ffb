//! Configuration management
//!
//! YAML-based configuration with support for:
//! - Environment variable overrides
//! - Multiple configuration file locations
//! - Default values for all settings

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub attendance: AttendancePolicy,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Entity store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Simulate per-operation latency the way a remote backend would.
    /// Disabled in tests.
    #[serde(default = "default_true")]
    pub simulate_latency: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            simulate_latency: true,
        }
    }
}

/// Attendance rules policy
///
/// The defaults reproduce the historical behavior: a second open record
/// per employee and day is allowed, and a clock-out earlier than the
/// clock-in clamps the worked time to zero instead of failing.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AttendancePolicy {
    #[serde(default = "default_true")]
    pub allow_multiple_open_records: bool,
    #[serde(default)]
    pub reject_negative_duration: bool,
    /// Clock-ins strictly after this hour-of-day are classified late
    #[serde(default = "default_late_threshold_hour")]
    pub late_threshold_hour: u32,
}

impl Default for AttendancePolicy {
    fn default() -> Self {
        Self {
            allow_multiple_open_records: true,
            reject_negative_duration: false,
            late_threshold_hour: default_late_threshold_hour(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

fn default_true() -> bool {
    true
}

fn default_late_threshold_hour() -> u32 {
    9
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// Precedence: `STAFFHUB_CONFIG` path, then the first existing file
    /// from the standard locations, then built-in defaults. Environment
    /// variable overrides are applied last.
    pub fn load() -> Result<Self> {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        let config_path = std::env::var("STAFFHUB_CONFIG")
            .map(PathBuf::from)
            .ok()
            .or_else(Self::find_config_file);

        let mut config = if let Some(ref path) = config_path {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {:?}", path))?;
                serde_norway::from_str(&contents)
                    .with_context(|| format!("Failed to parse config file: {:?}", path))?
            } else {
                AppConfig::default()
            }
        } else {
            AppConfig::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Standard configuration file locations, in order of preference
    fn find_config_file() -> Option<PathBuf> {
        let candidates = [
            PathBuf::from("staffhub.yaml"),
            PathBuf::from("config/staffhub.yaml"),
            dirs::config_dir()
                .map(|d| d.join("staffhub/config.yaml"))
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|p| p.exists())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("STAFFHUB_SIMULATE_LATENCY") {
            self.store.simulate_latency = v.to_lowercase() == "true";
        }
        if let Ok(v) = std::env::var("STAFFHUB_ALLOW_MULTIPLE_OPEN_RECORDS") {
            self.attendance.allow_multiple_open_records = v.to_lowercase() == "true";
        }
        if let Ok(v) = std::env::var("STAFFHUB_REJECT_NEGATIVE_DURATION") {
            self.attendance.reject_negative_duration = v.to_lowercase() == "true";
        }
        if let Ok(level) = std::env::var("RUST_LOG") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("STAFFHUB_LOG_FORMAT") {
            if format.to_lowercase() == "json" {
                self.logging.format = LogFormat::Json;
            }
        }
    }
}
