//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the rule model and the
//! components built on top of it.

use crate::rule::RuleType;

/// Common view over every rule-like entity
///
/// Implemented by `Rule`, `RuleCombination`, `RulePackage` and `RuleEntry`.
pub trait FieldSpec {
    /// Identifier of the entity
    fn name(&self) -> &str;

    /// Description (explicit or generated)
    fn description(&self) -> &str;

    /// Kind of entity
    fn rule_type(&self) -> RuleType;

    /// Render the entity into prompt text
    fn to_prompt(&self) -> String;
}

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (shadow-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error: std::fmt::Display;

    /// Send one instruction and return the model's reply text
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Configured model identifier, reported in result metadata
    fn model_id(&self) -> &str;
}
