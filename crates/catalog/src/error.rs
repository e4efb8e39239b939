//! Catalog error model.

use thiserror::Error;

use crate::validation::RuleViolation;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Why a catalog write did not happen.
///
/// Lookups that find nothing are not errors; they return `None` (or `false` for
/// deletes).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The candidate broke a business rule. Nothing was written.
    #[error(transparent)]
    Rule(#[from] RuleViolation),

    /// Update-by-position was given a position the catalog does not have.
    ///
    /// The caller resolved the index against a view of the catalog that is no longer
    /// current.
    #[error("{kind} index {index} is out of bounds (len {len})")]
    IndexOutOfBounds {
        kind: &'static str,
        index: usize,
        len: usize,
    },

    /// A thread panicked while holding the shared catalog lock.
    #[error("catalog lock poisoned")]
    LockPoisoned,
}

impl CatalogError {
    /// The rule that was broken, if this is a rule rejection.
    pub fn violation(&self) -> Option<&RuleViolation> {
        match self {
            CatalogError::Rule(v) => Some(v),
            _ => None,
        }
    }
}
