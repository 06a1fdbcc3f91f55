//! The ShadowAi facade

use crate::config::GeneratorConfig;
use crate::error::{GeneratorError, Result};
use crate::input::RulesInput;
use crate::normalizer::normalize;
use crate::parser::extract_payload;
use crate::prompt::PromptBuilder;
use crate::types::{Generated, MockData, ResultEnvelope};
use serde_json::{Map, Value};
use shadow_llm::OpenAiProvider;
use shadow_rules::LlmProvider;
use tracing::{debug, info, warn};

/// Generates mock data from rules through an LLM
///
/// Each call runs normalize, prompt, model call and extraction once. The
/// facade holds no mutable state of its own.
pub struct ShadowAi<L: LlmProvider> {
    provider: L,
}

impl ShadowAi<OpenAiProvider> {
    /// Create a facade talking to the configured chat-completions API
    ///
    /// Reads the API key from the variable named by `api_key_env`.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        Ok(Self::new(config.provider()?))
    }
}

impl<L: LlmProvider> ShadowAi<L> {
    /// Create a new facade over a provider
    pub fn new(provider: L) -> Self {
        Self { provider }
    }

    /// The underlying provider
    pub fn provider(&self) -> &L {
        &self.provider
    }

    /// Model identifier reported in metadata
    pub fn model_id(&self) -> &str {
        self.provider.model_id()
    }

    /// Build the prompt for `input` without calling the model
    pub fn build_prompt(&self, input: impl Into<RulesInput>, count: usize) -> Result<String> {
        check_count(count)?;
        let rules = normalize(input)?;
        Ok(PromptBuilder::new(&rules, count).build())
    }

    /// Generate `count` records and return the raw payload
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `count` is zero
    /// - The input cannot be normalized
    /// - The model call fails
    /// - The reply holds no usable JSON
    pub fn generate(&self, input: impl Into<RulesInput>, count: usize) -> Result<MockData> {
        self.run(input.into(), count).map(|(data, _)| data)
    }

    /// Generate `count` records wrapped in a result envelope
    ///
    /// Never fails: errors are reported through `success` and `error`.
    pub fn generate_formatted(&self, input: impl Into<RulesInput>, count: usize) -> ResultEnvelope {
        match self.run(input.into(), count) {
            Ok((data, rules_count)) => ResultEnvelope::success(data, self.model_id(), rules_count),
            Err(e) => {
                warn!("Generation failed: {}", e);
                ResultEnvelope::failure(e.to_string(), self.model_id())
            }
        }
    }

    /// Generate with the output mode chosen at runtime
    ///
    /// In formatted mode the result is always `Ok(Generated::Envelope(..))`.
    pub fn generate_with(
        &self,
        input: impl Into<RulesInput>,
        count: usize,
        format_output: bool,
    ) -> Result<Generated> {
        if format_output {
            Ok(Generated::Envelope(self.generate_formatted(input, count)))
        } else {
            self.generate(input, count).map(Generated::Data)
        }
    }

    /// Generate one record from plain field names
    ///
    /// ```
    /// use shadow_generator::ShadowAi;
    /// use shadow_llm::MockProvider;
    ///
    /// let ai = ShadowAi::new(MockProvider::new(r#"{"name": "Ada", "email": "ada@example.com"}"#));
    /// let record = ai.quick(["name", "email"]).unwrap();
    /// assert_eq!(record["name"], "Ada");
    /// ```
    pub fn quick<I, S>(&self, fields: I) -> Result<Map<String, Value>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = fields.into_iter().map(Into::into).collect();
        self.generate(names, 1)?
            .into_records()
            .into_iter()
            .next()
            .ok_or_else(|| GeneratorError::MalformedJson("no record returned".to_string()))
    }

    fn run(&self, input: RulesInput, count: usize) -> Result<(MockData, usize)> {
        check_count(count)?;
        let rules = normalize(input)?;

        info!(
            "Generating {} record(s) from {} rule(s) with model '{}'",
            count,
            rules.len(),
            self.model_id()
        );

        let prompt = PromptBuilder::new(&rules, count).build();
        debug!("Prompt length: {} chars", prompt.len());

        let response = self
            .provider
            .generate(&prompt)
            .map_err(|e| GeneratorError::ModelInvocation(e.to_string()))?;
        debug!("LLM response length: {} chars", response.len());

        let data = extract_payload(&response, count)?;
        info!("Generation complete: {} record(s)", data.len());

        Ok((data, rules.len()))
    }
}

fn check_count(count: usize) -> Result<()> {
    if count == 0 {
        return Err(GeneratorError::InvalidCount(count));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{META_GENERATED_COUNT, META_MODEL_ID, META_RULES_COUNT};
    use serde_json::json;
    use shadow_llm::MockProvider;

    #[test]
    fn test_generate_single() {
        let ai = ShadowAi::new(MockProvider::new(r#"{"email":"x@y.com"}"#));
        let data = ai.generate("email", 1).unwrap();
        assert_eq!(data.as_record().unwrap()["email"], "x@y.com");
    }

    #[test]
    fn test_generate_formatted_success() {
        let ai = ShadowAi::new(
            MockProvider::new(r#"{"email":"x@y.com"}"#).with_model_id("gpt-4o-mini"),
        );
        let envelope = ai.generate_formatted("email", 1);

        assert!(envelope.success);
        assert!(envelope.error.is_none());
        assert_eq!(
            serde_json::to_value(envelope.data.as_ref().unwrap()).unwrap(),
            json!({"email": "x@y.com"})
        );
        assert_eq!(envelope.meta(META_RULES_COUNT), Some(&json!(1)));
        assert_eq!(envelope.meta(META_GENERATED_COUNT), Some(&json!(1)));
        assert_eq!(envelope.meta(META_MODEL_ID), Some(&json!("gpt-4o-mini")));
    }

    #[test]
    fn test_invalid_input_both_modes() {
        let ai = ShadowAi::new(MockProvider::default());

        assert!(matches!(
            ai.generate(json!(123), 1),
            Err(GeneratorError::InvalidInputKind(_))
        ));

        let envelope = ai.generate_formatted(json!(123), 1);
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert!(!envelope.error.unwrap_or_default().is_empty());
        assert_eq!(ai.provider().call_count(), 0);
    }

    #[test]
    fn test_zero_count() {
        let ai = ShadowAi::new(MockProvider::default());
        assert!(matches!(ai.generate("email", 0), Err(GeneratorError::InvalidCount(0))));
        assert!(ai.build_prompt("email", 0).is_err());
    }

    #[test]
    fn test_model_error_passthrough() {
        let ai = ShadowAi::new(MockProvider::failing("quota exhausted"));

        match ai.generate("email", 1) {
            Err(GeneratorError::ModelInvocation(message)) => {
                assert!(message.contains("quota exhausted"))
            }
            other => panic!("Expected ModelInvocation, got {:?}", other),
        }

        let envelope = ai.generate_formatted("email", 1);
        assert_eq!(envelope.error.as_deref(), Some("LLM error: quota exhausted"));
    }

    #[test]
    fn test_no_json_reply() {
        let ai = ShadowAi::new(MockProvider::new("I cannot help with that."));
        let err = ai.generate("email", 1).unwrap_err();
        assert!(err.to_string().contains("No valid JSON found in response"));
    }

    #[test]
    fn test_generate_with_modes() {
        let ai = ShadowAi::new(MockProvider::new(r#"[{"a":1},{"a":2}]"#));

        match ai.generate_with("a", 2, false).unwrap() {
            Generated::Data(data) => assert_eq!(data.len(), 2),
            other => panic!("Expected data, got {:?}", other),
        }
        match ai.generate_with("a", 2, true).unwrap() {
            Generated::Envelope(envelope) => {
                assert!(envelope.success);
                assert_eq!(envelope.meta(META_GENERATED_COUNT), Some(&json!(2)));
            }
            other => panic!("Expected envelope, got {:?}", other),
        }
    }

    #[test]
    fn test_quick() {
        let ai = ShadowAi::new(MockProvider::new(r#"[{"name":"Ada","age":36}]"#));
        let record = ai.quick(["name", "age"]).unwrap();
        assert_eq!(record["age"], 36);

        let prompt = ai.provider().last_prompt().unwrap();
        assert!(prompt.contains("- name: Generate a name"));
        assert!(prompt.contains("- age: Generate a age"));
        assert!(prompt.contains("Generate a single JSON object"));
    }

    #[test]
    fn test_build_prompt_matches_sent_prompt() {
        let ai = ShadowAi::new(MockProvider::new("[]"));
        let expected = ai.build_prompt(vec!["id", "title"], 5).unwrap();
        ai.generate(vec!["id", "title"], 5).unwrap();
        assert_eq!(ai.provider().last_prompt().unwrap(), expected);
    }

    #[test]
    fn test_empty_rules_allowed() {
        let ai = ShadowAi::new(MockProvider::new("{}"));
        let envelope = ai.generate_formatted(Vec::<String>::new(), 1);
        assert!(envelope.success);
        assert_eq!(envelope.meta(META_RULES_COUNT), Some(&json!(0)));
    }
}
