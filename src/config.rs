//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honoured for local runs.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Default location of the exported posts.
pub const DEFAULT_POSTS_PATH: &str = "data/runkeeper_posts.json";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Structured JSON, one object per line
    Json,
    /// Human-readable lines
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(ConfigError::Invalid("LOG_FORMAT", other.to_string())),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file holding the raw posts
    pub posts_path: PathBuf,
    /// Log output format
    pub log_format: LogFormat,
    /// How many of the most common activities the summary reports
    pub top_activities: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            posts_path: PathBuf::from(DEFAULT_POSTS_PATH),
            log_format: LogFormat::Json,
            top_activities: 3,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();

        let log_format = match env::var("LOG_FORMAT") {
            Ok(v) => v.parse()?,
            Err(_) => defaults.log_format,
        };

        let top_activities = match env::var("TOP_ACTIVITIES") {
            Ok(v) => parse_top_activities(&v)?,
            Err(_) => defaults.top_activities,
        };

        Ok(Self {
            posts_path: env::var("POSTS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.posts_path),
            log_format,
            top_activities,
        })
    }
}

fn parse_top_activities(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ConfigError::Invalid("TOP_ACTIVITIES", raw.to_string())),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
