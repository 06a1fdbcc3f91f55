//! Configuration for the generator

use crate::error::{GeneratorError, Result};
use serde::{Deserialize, Serialize};
use shadow_llm::OpenAiProvider;
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding the model identifier
pub const MODEL_ENV: &str = "SHADOW_AI_MODEL";

/// Environment variable overriding the API base URL
pub const API_BASE_ENV: &str = "SHADOW_AI_API_BASE";

/// Configuration for the generator and its model provider
///
/// Missing keys in a TOML file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Model identifier sent to the API and reported in metadata
    pub model_id: String,

    /// Chat-completions API root
    pub api_base: String,

    /// Name of the environment variable holding the API key
    pub api_key_env: String,

    /// Request timeout (seconds)
    pub timeout_secs: u64,

    /// Sampling temperature; provider default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Record count used when the caller gives none
    pub default_count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model_id: shadow_llm::openai::DEFAULT_MODEL.to_string(),
            api_base: shadow_llm::openai::DEFAULT_API_BASE.to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            timeout_secs: shadow_llm::openai::DEFAULT_TIMEOUT_SECS,
            temperature: None,
            default_count: 1,
        }
    }
}

impl GeneratorConfig {
    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.model_id.trim().is_empty() {
            return Err("model_id cannot be empty".to_string());
        }
        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            return Err(format!("api_base must be an http(s) URL, got '{}'", self.api_base));
        }
        if self.api_key_env.trim().is_empty() {
            return Err("api_key_env cannot be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(format!("temperature must be within 0.0..=2.0, got {}", temperature));
            }
        }
        if self.default_count == 0 {
            return Err("default_count must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Read and validate a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml(&contents)?;
        config.validate().map_err(GeneratorError::Config)?;
        Ok(config)
    }

    /// Apply `SHADOW_AI_MODEL` and `SHADOW_AI_API_BASE` from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup; empty values are ignored
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        if let Some(model_id) = present(MODEL_ENV) {
            self.model_id = model_id;
        }
        if let Some(api_base) = present(API_BASE_ENV) {
            self.api_base = api_base;
        }
        self
    }

    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> Result<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                GeneratorError::Config(format!(
                    "{} is not set; export it or add it to a .env file",
                    self.api_key_env
                ))
            })
    }

    /// Build the HTTP provider described by this configuration
    pub fn provider(&self) -> Result<OpenAiProvider> {
        self.validate().map_err(GeneratorError::Config)?;
        let mut provider = OpenAiProvider::new(&self.api_base, &self.model_id, self.api_key()?)
            .with_timeout(self.timeout());
        if let Some(temperature) = self.temperature {
            provider = provider.with_temperature(temperature);
        }
        Ok(provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config_is_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.model_id, "gpt-4o-mini");
        assert_eq!(config.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_invalid_timeout() {
        let config = GeneratorConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_api_base() {
        let config = GeneratorConfig {
            api_base: "api.openai.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_temperature() {
        let config = GeneratorConfig {
            temperature: Some(3.5),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GeneratorConfig {
            temperature: Some(0.7),
            default_count: 5,
            ..Default::default()
        };
        let toml_str = config.to_toml().unwrap();
        let parsed = GeneratorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = GeneratorConfig::from_toml("model_id = \"gpt-4o\"\n").unwrap();
        assert_eq!(parsed.model_id, "gpt-4o");
        assert_eq!(parsed.timeout_secs, 60);
        assert_eq!(parsed.default_count, 1);
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            GeneratorConfig::from_toml("timeout_secs = \"soon\""),
            Err(GeneratorError::Config(_))
        ));
    }

    #[test]
    fn test_load_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shadow.toml");
        std::fs::write(&path, "default_count = 0\n").unwrap();
        assert!(matches!(GeneratorConfig::load(&path), Err(GeneratorError::Config(_))));

        std::fs::write(&path, "default_count = 3\n").unwrap();
        assert_eq!(GeneratorConfig::load(&path).unwrap().default_count, 3);
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            (MODEL_ENV, "gpt-4o"),
            (API_BASE_ENV, "   "),
        ]
        .into_iter()
        .collect();

        let config = GeneratorConfig::default()
            .with_overrides(|key| env.get(key).map(|value| value.to_string()));
        assert_eq!(config.model_id, "gpt-4o");
        assert_eq!(config.api_base, "https://api.openai.com/v1");
    }

    #[test]
    fn test_missing_api_key() {
        let config = GeneratorConfig {
            api_key_env: "SHADOW_AI_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.api_key(), Err(GeneratorError::Config(_))));
        assert!(config.provider().is_err());
    }
}
