//! Error types for the generator

use shadow_rules::ValidationError;
use thiserror::Error;

/// Errors that can occur while generating mock data
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Rules input had a shape the normalizer does not accept
    #[error("Unsupported rules input: {0}")]
    InvalidInputKind(String),

    /// A rule, combination or package could not be built
    #[error("Invalid rule definition: {0}")]
    Validation(#[from] ValidationError),

    /// Model reply contained no balanced JSON object or array
    #[error("No valid JSON found in response")]
    NoValidJsonFound,

    /// A JSON region was found but is not usable data
    #[error("No valid JSON found in response: {0}")]
    MalformedJson(String),

    /// Model call failed; carries the provider's message
    #[error("{0}")]
    ModelInvocation(String),

    /// Requested record count is not positive
    #[error("Invalid record count: {0} (must be at least 1)")]
    InvalidCount(usize),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rule file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rule file could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for GeneratorError {
    fn from(e: serde_json::Error) -> Self {
        GeneratorError::Serialization(e.to_string())
    }
}

impl From<serde_yaml::Error> for GeneratorError {
    fn from(e: serde_yaml::Error) -> Self {
        GeneratorError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for GeneratorError {
    fn from(e: toml::de::Error) -> Self {
        GeneratorError::Config(format!("Failed to parse TOML: {}", e))
    }
}

impl From<toml::ser::Error> for GeneratorError {
    fn from(e: toml::ser::Error) -> Self {
        GeneratorError::Serialization(format!("Failed to serialize to TOML: {}", e))
    }
}

/// Result alias for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;
