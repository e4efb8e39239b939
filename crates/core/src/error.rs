//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error for raw input that cannot become a domain value.
///
/// These are parse failures owned by whoever collects the raw text (a form, a CLI flag).
/// Business-rule rejections live in `stockroom-catalog` as `RuleViolation`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A price could not be parsed into a monetary amount.
    #[error("invalid price: {0}")]
    InvalidPrice(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_price(msg: impl Into<String>) -> Self {
        Self::InvalidPrice(msg.into())
    }
}
