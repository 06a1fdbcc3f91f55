//! ShadowAI Generator
//!
//! Turns field rules into mock data by prompting an LLM.
//!
//! # Architecture
//!
//! ```text
//! RulesInput → Normalizer → PromptBuilder → LlmProvider → Extractor → MockData / ResultEnvelope
//! ```
//!
//! # Key Features
//!
//! - **Flexible input**: bare names, lists, rules, combinations, packages or rule-file mappings
//! - **Deterministic prompts**: the same rules always produce the same instruction
//! - **Tolerant extraction**: the first balanced JSON value in the reply is used, prose is ignored
//! - **Two output modes**: raw payload with typed errors, or a never-failing envelope
//! - **Rule files**: JSON and YAML load/save
//!
//! # Example Usage
//!
//! ```
//! use shadow_generator::ShadowAi;
//! use shadow_llm::MockProvider;
//! use shadow_rules::library;
//!
//! let llm = MockProvider::new(r#"[{"full_name": "Ada Lovelace", "email": "ada@example.com", "age": 36, "phone": "555-0100"}]"#);
//! let ai = ShadowAi::new(llm);
//!
//! let envelope = ai.generate_formatted(library::person(), 1);
//! assert!(envelope.success);
//! assert_eq!(envelope.metadata["rules_count"], 1);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
pub mod files;
mod generator;
mod input;
pub mod normalizer;
pub mod parser;
mod prompt;
mod types;


pub use config::{GeneratorConfig, API_BASE_ENV, MODEL_ENV};
pub use error::{GeneratorError, Result};
pub use generator::ShadowAi;
pub use input::RulesInput;
pub use normalizer::normalize;
pub use parser::extract_payload;
pub use prompt::PromptBuilder;
pub use types::{
    Generated, MockData, ResultEnvelope, META_GENERATED_COUNT, META_MODEL_ID, META_RULES_COUNT,
};
