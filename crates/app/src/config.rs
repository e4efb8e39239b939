//! Environment configuration.
//!
//! | variable | values | default |
//! |----------|--------|---------|
//! | `STOCKROOM_SEED` | `true`/`false` (also `1`/`0`, `yes`/`no`) | `true` |
//! | `STOCKROOM_LOG_FORMAT` | `json`/`pretty` | `json` |
//! | `STOCKROOM_PART_QUERY` | search text | all parts |
//! | `STOCKROOM_PRODUCT_QUERY` | search text | all products |

use thiserror::Error;

use stockroom_observability::{LogFormat, ParseLogFormatError};

pub const SEED_VAR: &str = "STOCKROOM_SEED";
pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";
pub const PART_QUERY_VAR: &str = "STOCKROOM_PART_QUERY";
pub const PRODUCT_QUERY_VAR: &str = "STOCKROOM_PRODUCT_QUERY";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a boolean, got '{value}'")]
    InvalidBool { key: &'static str, value: String },

    #[error("STOCKROOM_LOG_FORMAT: {0}")]
    InvalidLogFormat(#[from] ParseLogFormatError),
}

/// Runtime settings for the `stockroom` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Start from the sample catalog instead of an empty one.
    pub seed: bool,
    pub log_format: LogFormat,
    pub part_query: Option<String>,
    pub product_query: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: true,
            log_format: LogFormat::default(),
            part_query: None,
            product_query: None,
        }
    }
}

impl AppConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup` (a variable name to its value, if set).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let seed = match lookup(SEED_VAR) {
            Some(raw) => parse_bool(SEED_VAR, &raw)?,
            None => defaults.seed,
        };
        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => defaults.log_format,
        };

        Ok(Self {
            seed,
            log_format,
            part_query: non_blank(lookup(PART_QUERY_VAR)),
            product_query: non_blank(lookup(PRODUCT_QUERY_VAR)),
        })
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: raw.to_string(),
        }),
    }
}

// An exported-but-empty variable means "no filter".
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
