//! Validation errors raised while constructing rule entities

use thiserror::Error;

/// Errors raised when a rule, combination or package cannot be built
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Entity name was empty or whitespace
    #[error("{kind} name cannot be empty")]
    EmptyName {
        /// Which entity was being built ("rule", "combination", "package")
        kind: &'static str,
    },

    /// Unknown `rule_type` discriminator
    #[error("Invalid rule type: '{0}' (expected record, combination or package)")]
    InvalidRuleType(String),

    /// A field was present but had the wrong shape
    #[error("Invalid field '{field}': expected {expected}")]
    InvalidField {
        /// Field name in the serialized mapping
        field: String,
        /// Human readable description of the expected shape
        expected: &'static str,
    },

    /// A required field was absent
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    /// A shorthand string could not be parsed
    #[error("Invalid shorthand: {0}")]
    InvalidShorthand(String),
}

/// Result alias for rule construction
pub type Result<T> = std::result::Result<T, ValidationError>;
