//! Library command implementation.

use crate::error::Result;
use crate::output::Formatter;
use shadow_rules::{library, RuleEntry};

/// Execute the library command.
pub fn execute_library(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_entries(&builtin_entries())?);
    Ok(())
}

/// Every built-in definition in listing order.
pub fn builtin_entries() -> Vec<RuleEntry> {
    library::names()
        .iter()
        .filter_map(|name| library::lookup(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_entries_complete() {
        assert_eq!(builtin_entries().len(), library::names().len());
    }
}
