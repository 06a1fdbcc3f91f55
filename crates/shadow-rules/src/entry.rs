//! Normalized rule entries

use crate::combination::RuleCombination;
use crate::error::Result;
use crate::mapping;
use crate::package::RulePackage;
use crate::rule::{Rule, RuleType};
use crate::traits::FieldSpec;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// One normalized unit of a generation request
#[derive(Debug, Clone, PartialEq)]
pub enum RuleEntry {
    /// A single field rule
    Record(Rule),
    /// A combination of fields
    Combination(RuleCombination),
    /// A package of fields
    Package(RulePackage),
}

impl RuleEntry {
    /// Rebuild the matching entity from a decoded mapping
    ///
    /// The `rule_type` field selects the entity; a missing discriminator
    /// means a record rule.
    ///
    /// ```
    /// use serde_json::json;
    /// use shadow_rules::{RuleEntry, RuleType, FieldSpec};
    ///
    /// let value = json!({"name": "contact", "rule_type": "combination", "rules": ["email", "phone"]});
    /// let entry = RuleEntry::from_map(value.as_object().unwrap()).unwrap();
    /// assert_eq!(entry.rule_type(), RuleType::Combination);
    /// ```
    pub fn from_map(obj: &Map<String, Value>) -> Result<Self> {
        let rule_type: RuleType = match mapping::opt_string(obj, "rule_type")? {
            Some(raw) => raw.parse()?,
            None => RuleType::Record,
        };

        match rule_type {
            RuleType::Record => Rule::from_map(obj).map(RuleEntry::Record),
            RuleType::Combination => RuleCombination::from_map(obj).map(RuleEntry::Combination),
            RuleType::Package => RulePackage::from_map(obj).map(RuleEntry::Package),
        }
    }

    /// Rebuild from a decoded value; only mappings are accepted
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Object(obj) => Self::from_map(obj),
            _ => Err(mapping::invalid("rule", "a mapping")),
        }
    }

    /// Serialize into the rule-file mapping shape
    pub fn to_value(&self) -> Value {
        match self {
            RuleEntry::Record(rule) => rule.to_value(),
            RuleEntry::Combination(combo) => combo.to_value(),
            RuleEntry::Package(package) => package.to_value(),
        }
    }
}

impl FieldSpec for Rule {
    fn name(&self) -> &str {
        Rule::name(self)
    }

    fn description(&self) -> &str {
        Rule::description(self)
    }

    fn rule_type(&self) -> RuleType {
        Rule::rule_type(self)
    }

    fn to_prompt(&self) -> String {
        Rule::to_prompt(self)
    }
}

impl FieldSpec for RuleCombination {
    fn name(&self) -> &str {
        RuleCombination::name(self)
    }

    fn description(&self) -> &str {
        RuleCombination::description(self)
    }

    fn rule_type(&self) -> RuleType {
        RuleType::Combination
    }

    fn to_prompt(&self) -> String {
        RuleCombination::to_prompt(self)
    }
}

impl FieldSpec for RulePackage {
    fn name(&self) -> &str {
        RulePackage::name(self)
    }

    fn description(&self) -> &str {
        RulePackage::description(self)
    }

    fn rule_type(&self) -> RuleType {
        RuleType::Package
    }

    fn to_prompt(&self) -> String {
        RulePackage::to_prompt(self)
    }
}

impl FieldSpec for RuleEntry {
    fn name(&self) -> &str {
        self.as_spec().name()
    }

    fn description(&self) -> &str {
        self.as_spec().description()
    }

    fn rule_type(&self) -> RuleType {
        self.as_spec().rule_type()
    }

    fn to_prompt(&self) -> String {
        self.as_spec().to_prompt()
    }
}

impl RuleEntry {
    fn as_spec(&self) -> &dyn FieldSpec {
        match self {
            RuleEntry::Record(rule) => rule,
            RuleEntry::Combination(combo) => combo,
            RuleEntry::Package(package) => package,
        }
    }
}

impl Serialize for RuleEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl From<Rule> for RuleEntry {
    fn from(rule: Rule) -> Self {
        RuleEntry::Record(rule)
    }
}

impl From<RuleCombination> for RuleEntry {
    fn from(combo: RuleCombination) -> Self {
        RuleEntry::Combination(combo)
    }
}

impl From<RulePackage> for RuleEntry {
    fn from(package: RulePackage) -> Self {
        RuleEntry::Package(package)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use serde_json::json;

    #[test]
    fn test_from_map_defaults_to_record() {
        let value = json!({"name": "email", "description": "Generate an email address"});
        let entry = RuleEntry::from_map(value.as_object().unwrap()).unwrap();
        assert_eq!(entry.rule_type(), RuleType::Record);
        assert_eq!(entry.name(), "email");
        assert_eq!(entry.description(), "Generate an email address");
    }

    #[test]
    fn test_from_map_package() {
        let value = json!({
            "name": "person",
            "rule_type": "package",
            "rules": ["name", "email"],
            "category": "users",
            "version": "1.2.0"
        });
        let entry = RuleEntry::from_map(value.as_object().unwrap()).unwrap();
        match entry {
            RuleEntry::Package(package) => {
                assert_eq!(package.category(), Some("users"));
                assert_eq!(package.version(), "1.2.0");
                assert_eq!(package.rule_names(), ["name", "email"]);
            }
            other => panic!("Expected package, got {:?}", other),
        }
    }

    #[test]
    fn test_from_map_unknown_type() {
        let value = json!({"name": "x", "rule_type": "table"});
        assert_eq!(
            RuleEntry::from_map(value.as_object().unwrap()).unwrap_err(),
            ValidationError::InvalidRuleType("table".to_string())
        );
    }

    #[test]
    fn test_round_trip_every_kind() {
        let entries = vec![
            RuleEntry::from(Rule::new("email").unwrap().with_examples(["a@b.com"])),
            RuleEntry::from(RuleCombination::quick("full_name", ["first_name", "last_name"]).unwrap()),
            RuleEntry::from(RulePackage::quick("user", ["name", "email"]).unwrap().with_category("users")),
        ];

        for entry in entries {
            let value = entry.to_value();
            let parsed = RuleEntry::from_map(value.as_object().unwrap()).unwrap();
            assert_eq!(parsed.name(), entry.name());
            assert_eq!(parsed.description(), entry.description());
            assert_eq!(parsed, entry);
        }
    }

    #[test]
    fn test_from_value_rejects_scalars() {
        assert!(matches!(
            RuleEntry::from_value(&json!("email")),
            Err(ValidationError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_serialize_matches_to_value() {
        let entry = RuleEntry::from(Rule::new("age").unwrap());
        let serialized = serde_json::to_value(&entry).unwrap();
        assert_eq!(serialized, entry.to_value());
    }
}
