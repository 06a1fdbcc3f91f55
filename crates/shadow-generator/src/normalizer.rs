//! Turn any accepted rules input into an ordered list of rule entries

use crate::error::{GeneratorError, Result};
use crate::input::RulesInput;
use serde_json::Value;
use shadow_rules::{Rule, RuleEntry};
use tracing::debug;

/// Normalize rules input into rule entries, preserving input order
///
/// - A bare name becomes one record rule with a generated description.
/// - A list is normalized element by element; lists may not nest.
/// - A mapping is rebuilt from its `rule_type` discriminator.
///
/// # Errors
///
/// - `InvalidInputKind` for nested lists and JSON scalars other than strings
/// - `Validation` when an entity cannot be built
pub fn normalize(input: impl Into<RulesInput>) -> Result<Vec<RuleEntry>> {
    let mut entries = Vec::new();
    match input.into() {
        RulesInput::List(items) => {
            for item in items {
                push_single(item, &mut entries)?;
            }
        }
        RulesInput::Json(Value::Array(items)) => {
            for item in items {
                push_single(RulesInput::Json(item), &mut entries)?;
            }
        }
        other => push_single(other, &mut entries)?,
    }

    debug!("Normalized rules input into {} entries", entries.len());
    Ok(entries)
}

fn push_single(input: RulesInput, entries: &mut Vec<RuleEntry>) -> Result<()> {
    let entry = match input {
        RulesInput::Name(name) => RuleEntry::Record(Rule::new(name)?),
        RulesInput::Rule(rule) => RuleEntry::Record(rule),
        RulesInput::Combination(combo) => RuleEntry::Combination(combo),
        RulesInput::Package(package) => RuleEntry::Package(package),
        RulesInput::Mapping(map) => RuleEntry::from_map(&map)?,
        RulesInput::List(_) => return Err(GeneratorError::InvalidInputKind("list".to_string())),
        RulesInput::Json(value) => return push_single(from_json(value)?, entries),
    };
    entries.push(entry);
    Ok(())
}

/// Map a decoded JSON value onto the matching single-item input
fn from_json(value: Value) -> Result<RulesInput> {
    match value {
        Value::String(name) => Ok(RulesInput::Name(name)),
        Value::Object(map) => Ok(RulesInput::Mapping(map)),
        Value::Array(_) => Err(GeneratorError::InvalidInputKind("list".to_string())),
        Value::Number(_) => Err(GeneratorError::InvalidInputKind("number".to_string())),
        Value::Bool(_) => Err(GeneratorError::InvalidInputKind("boolean".to_string())),
        Value::Null => Err(GeneratorError::InvalidInputKind("null".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shadow_rules::{FieldSpec, RuleCombination, RulePackage, RuleType, ValidationError};

    #[test]
    fn test_bare_string() {
        let entries = normalize("email_address").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].rule_type(), RuleType::Record);
        assert_eq!(entries[0].name(), "email_address");
        assert_eq!(entries[0].description(), "Generate a email address");
    }

    #[test]
    fn test_list_of_strings_keeps_order() {
        let entries = normalize(vec!["name", "email", "age"]).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["name", "email", "age"]);
    }

    #[test]
    fn test_single_entities() {
        let combo = RuleCombination::quick("contact", ["email", "phone"]).unwrap();
        let package = RulePackage::quick("person", ["name"]).unwrap();

        assert_eq!(
            normalize(combo.clone()).unwrap(),
            vec![RuleEntry::Combination(combo)]
        );
        assert_eq!(
            normalize(package.clone()).unwrap(),
            vec![RuleEntry::Package(package)]
        );
    }

    #[test]
    fn test_mixed_list() {
        let input = RulesInput::List(vec![
            "name".into(),
            Rule::new("email").unwrap().into(),
            RuleCombination::quick("contact", ["phone"]).unwrap().into(),
            json!({"name": "user", "rule_type": "package", "rules": ["id"]}).into(),
        ]);

        let kinds: Vec<RuleType> = normalize(input)
            .unwrap()
            .iter()
            .map(|e| e.rule_type())
            .collect();
        assert_eq!(
            kinds,
            [RuleType::Record, RuleType::Record, RuleType::Combination, RuleType::Package]
        );
    }

    #[test]
    fn test_mapping_defaults_to_record() {
        let entries = normalize(json!({"name": "email", "examples": ["a@b.com"]})).unwrap();
        match &entries[0] {
            RuleEntry::Record(rule) => assert_eq!(rule.examples().unwrap(), ["a@b.com"]),
            other => panic!("Expected record, got {:?}", other),
        }
    }

    #[test]
    fn test_json_array() {
        let entries = normalize(json!(["name", {"name": "email"}])).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_empty_list_is_allowed() {
        assert!(normalize(Vec::<String>::new()).unwrap().is_empty());
    }

    #[test]
    fn test_nested_list_rejected() {
        let input = RulesInput::List(vec![RulesInput::List(vec!["a".into()])]);
        assert!(matches!(
            normalize(input),
            Err(GeneratorError::InvalidInputKind(kind)) if kind == "list"
        ));
        assert!(matches!(
            normalize(json!([["a"]])),
            Err(GeneratorError::InvalidInputKind(_))
        ));
    }

    #[test]
    fn test_json_scalars_rejected() {
        for (value, kind) in [(json!(123), "number"), (json!(true), "boolean"), (json!(null), "null")] {
            match normalize(value) {
                Err(GeneratorError::InvalidInputKind(found)) => assert_eq!(found, kind),
                other => panic!("Expected InvalidInputKind, got {:?}", other),
            }
        }
        assert!(matches!(
            normalize(json!(["email", 5])),
            Err(GeneratorError::InvalidInputKind(_))
        ));
    }

    #[test]
    fn test_empty_name_is_validation_error() {
        assert!(matches!(
            normalize(""),
            Err(GeneratorError::Validation(ValidationError::EmptyName { .. }))
        ));
    }

    #[test]
    fn test_unknown_rule_type() {
        assert!(matches!(
            normalize(json!({"name": "x", "rule_type": "matrix"})),
            Err(GeneratorError::Validation(ValidationError::InvalidRuleType(_)))
        ));
    }
}
