//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Covers deterministic business failures plus the one external boundary the
/// domain knows about (conversion rates). Transport and configuration errors
/// belong to the crates that own them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. negative price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. empty username, malformed UUID).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A closed enumeration was decoded from an out-of-set value.
    #[error("invalid {kind} value: '{value}'")]
    InvalidEnumValue { kind: &'static str, value: String },

    /// A referenced record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The conversion rate provider could not supply a rate.
    #[error("conversion rate unavailable: {0}")]
    RateUnavailable(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_enum(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidEnumValue {
            kind,
            value: value.into(),
        }
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn rate_unavailable(msg: impl Into<String>) -> Self {
        Self::RateUnavailable(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_enum_message_names_kind_and_value() {
        let err = DomainError::invalid_enum("currency", "xyz");
        assert_eq!(err.to_string(), "invalid currency value: 'xyz'");
    }

    #[test]
    fn not_found_carries_subject() {
        let err = DomainError::not_found("user 'alice'");
        assert_eq!(err, DomainError::NotFound("user 'alice'".to_string()));
        assert_eq!(err.to_string(), "not found: user 'alice'");
    }
}
