//! ShadowAI Rule Layer
//!
//! This crate contains the rule model used to describe mock data: what
//! fields a record has, how they are described to the model, and how rule
//! definitions are stored in rule files.
//!
//! ## Key Concepts
//!
//! - **Rule**: a single field specification (name, description, examples, constraints)
//! - **RuleCombination**: several fields merged under one strategy
//! - **RulePackage**: a named collection describing a whole record shape
//! - **RuleEntry**: the normalized unit the generator works with
//!
//! ## Architecture
//!
//! Pure data and string formatting only. The model-call boundary is the
//! `LlmProvider` trait; implementations live in `shadow-llm`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod combination;
pub mod entry;
pub mod error;
pub mod library;
mod mapping;
pub mod naming;
pub mod package;
pub mod rule;
pub mod traits;

// Re-exports for convenience
pub use combination::{CombinationMember, RuleCombination};
pub use entry::RuleEntry;
pub use error::ValidationError;
pub use package::{PackageMember, RulePackage};
pub use rule::{Rule, RuleType};
pub use traits::{FieldSpec, LlmProvider};
