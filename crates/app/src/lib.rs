//! `stockroom` binary support: environment configuration and the JSON report.

pub mod config;
pub mod report;

pub use config::{AppConfig, ConfigError};
pub use report::{Report, build_report};
