//! Command implementations.

pub mod generate;
pub mod library;
pub mod rules;

pub use self::generate::{execute_generate, execute_prompt};
pub use self::library::execute_library;
pub use self::rules::execute_rules;
