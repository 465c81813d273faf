//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Deterministic business failures only; staging and checkout have their
/// own error types next to the shopping layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_pick_the_matching_variant() {
        assert_eq!(
            DomainError::validation("name cannot be empty"),
            DomainError::Validation("name cannot be empty".to_string())
        );
        assert_eq!(
            DomainError::invalid_id("CustomerId: bad digit"),
            DomainError::InvalidId("CustomerId: bad digit".to_string())
        );
    }

    #[test]
    fn display_prefixes_the_failure_kind() {
        let err = DomainError::validation("count out of range");
        assert_eq!(err.to_string(), "validation failed: count out of range");
    }
}
