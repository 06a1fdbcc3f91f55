//! Rule files in JSON and YAML
//!
//! A rule file holds a list of rule mappings (a single mapping is also
//! accepted when loading). Each mapping carries `name`, `rule_type` and the
//! fields of that type. Loading goes through the normalizer, so files may
//! also list bare field names.

use crate::error::Result;
use crate::normalizer::normalize;
use serde_json::{json, Value};
use shadow_rules::{RuleEntry, RuleType};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load rules from a JSON file
pub fn load_rules_from_json(path: impl AsRef<Path>) -> Result<Vec<RuleEntry>> {
    let contents = fs::read_to_string(path.as_ref())?;
    let value: Value = serde_json::from_str(&contents)?;
    decode(value, path.as_ref())
}

/// Load rules from a YAML file
pub fn load_rules_from_yaml(path: impl AsRef<Path>) -> Result<Vec<RuleEntry>> {
    let contents = fs::read_to_string(path.as_ref())?;
    let value: Value = serde_yaml::from_str(&contents)?;
    decode(value, path.as_ref())
}

/// Load rules choosing the format from the file extension
///
/// `.yaml` and `.yml` are read as YAML, everything else as JSON.
pub fn load_rules(path: impl AsRef<Path>) -> Result<Vec<RuleEntry>> {
    let path = path.as_ref();
    if is_yaml(path) {
        load_rules_from_yaml(path)
    } else {
        load_rules_from_json(path)
    }
}

/// Save rules as a pretty-printed JSON list
pub fn save_rules_to_json(entries: &[RuleEntry], path: impl AsRef<Path>) -> Result<()> {
    let rendered = serde_json::to_string_pretty(&encode(entries))?;
    write(path.as_ref(), rendered)
}

/// Save rules as a YAML list
pub fn save_rules_to_yaml(entries: &[RuleEntry], path: impl AsRef<Path>) -> Result<()> {
    let rendered = serde_yaml::to_string(&encode(entries))?;
    write(path.as_ref(), rendered)
}

/// Starter mapping for a rule of the given type
///
/// ```
/// use shadow_generator::files::rule_template;
/// use shadow_rules::RuleType;
///
/// let template = rule_template(RuleType::Combination);
/// assert_eq!(template["rule_type"], "combination");
/// assert_eq!(template["combination_logic"], "combine");
/// ```
pub fn rule_template(rule_type: RuleType) -> Value {
    match rule_type {
        RuleType::Record => json!({
            "name": "field_name",
            "description": "Describe the value to generate",
            "rule_type": "record",
            "examples": ["example_1", "example_2"],
            "constraints": {},
        }),
        RuleType::Combination => json!({
            "name": "combination_name",
            "description": "Describe how the fields combine",
            "rule_type": "combination",
            "rules": ["field_1", "field_2"],
            "combination_logic": shadow_rules::combination::DEFAULT_COMBINATION_LOGIC,
        }),
        RuleType::Package => json!({
            "name": "package_name",
            "description": "Describe the record this package produces",
            "rule_type": "package",
            "rules": ["field_1", "field_2", "field_3"],
            "category": "general",
            "version": shadow_rules::package::DEFAULT_PACKAGE_VERSION,
        }),
    }
}

fn decode(value: Value, path: &Path) -> Result<Vec<RuleEntry>> {
    let entries = normalize(value)?;
    debug!("Loaded {} rule(s) from {}", entries.len(), path.display());
    Ok(entries)
}

fn encode(entries: &[RuleEntry]) -> Value {
    Value::Array(entries.iter().map(RuleEntry::to_value).collect())
}

fn write(path: &Path, contents: String) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    debug!("Saved rules to {}", path.display());
    Ok(())
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}
