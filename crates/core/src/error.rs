//! Domain error model.

use thiserror::Error;

/// Result type used across the inventory domain.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant describes a rejected stock operation. None of them leave the
/// stock table partially updated: when an operation returns an error the table
/// is exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input failed a type or shape check (e.g. non-text item name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The named item is not in stock.
    #[error("item not found: {0}")]
    NotFound(String),

    /// A quantity update would leave the `i64` range.
    #[error("quantity overflow for {item}")]
    Overflow { item: String },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }

    pub fn overflow(item: impl Into<String>) -> Self {
        Self::Overflow { item: item.into() }
    }
}
