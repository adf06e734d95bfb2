//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown loan purpose: {0}")]
    UnknownPurpose(String),

    #[error("Invalid value for {field}: {value:?} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid probability: {0} (must be within 0..=1)")]
    InvalidProbability(f64),
}

impl DomainError {
    pub(crate) fn invalid_value(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DomainError::InvalidValue {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_display() {
        let error = DomainError::invalid_value("fico", "abc", "expected a whole number");
        assert_eq!(
            error.to_string(),
            "Invalid value for fico: \"abc\" (expected a whole number)"
        );
    }

    #[test]
    fn test_unknown_field_display() {
        let error = DomainError::UnknownField("salary".to_string());
        assert_eq!(error.to_string(), "Unknown field: salary");
    }
}
