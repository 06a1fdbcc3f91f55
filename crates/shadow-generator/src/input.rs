//! Accepted shapes of rule input

use serde_json::{Map, Value};
use shadow_rules::{Rule, RuleCombination, RuleEntry, RulePackage};

/// Every input shape the generator accepts
///
/// Most callers rely on the `From` conversions:
///
/// ```
/// use shadow_generator::RulesInput;
/// use shadow_rules::Rule;
///
/// let _: RulesInput = "email".into();
/// let _: RulesInput = vec!["name", "email"].into();
/// let _: RulesInput = Rule::new("age").unwrap().into();
/// let _: RulesInput = serde_json::json!({"name": "email"}).into();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RulesInput {
    /// Bare field name
    Name(String),
    /// Ordered list of single items
    List(Vec<RulesInput>),
    /// Record rule
    Rule(Rule),
    /// Rule combination
    Combination(RuleCombination),
    /// Rule package
    Package(RulePackage),
    /// Decoded rule-file mapping
    Mapping(Map<String, Value>),
    /// Arbitrary decoded JSON, dispatched on its shape
    Json(Value),
}

impl From<&str> for RulesInput {
    fn from(name: &str) -> Self {
        RulesInput::Name(name.to_string())
    }
}

impl From<String> for RulesInput {
    fn from(name: String) -> Self {
        RulesInput::Name(name)
    }
}

impl From<Vec<&str>> for RulesInput {
    fn from(names: Vec<&str>) -> Self {
        RulesInput::List(names.into_iter().map(RulesInput::from).collect())
    }
}

impl From<Vec<String>> for RulesInput {
    fn from(names: Vec<String>) -> Self {
        RulesInput::List(names.into_iter().map(RulesInput::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for RulesInput {
    fn from(names: [&str; N]) -> Self {
        RulesInput::List(names.into_iter().map(RulesInput::from).collect())
    }
}

impl From<Rule> for RulesInput {
    fn from(rule: Rule) -> Self {
        RulesInput::Rule(rule)
    }
}

impl From<Vec<Rule>> for RulesInput {
    fn from(rules: Vec<Rule>) -> Self {
        RulesInput::List(rules.into_iter().map(RulesInput::Rule).collect())
    }
}

impl From<RuleCombination> for RulesInput {
    fn from(combo: RuleCombination) -> Self {
        RulesInput::Combination(combo)
    }
}

impl From<RulePackage> for RulesInput {
    fn from(package: RulePackage) -> Self {
        RulesInput::Package(package)
    }
}

impl From<RuleEntry> for RulesInput {
    fn from(entry: RuleEntry) -> Self {
        match entry {
            RuleEntry::Record(rule) => RulesInput::Rule(rule),
            RuleEntry::Combination(combo) => RulesInput::Combination(combo),
            RuleEntry::Package(package) => RulesInput::Package(package),
        }
    }
}

impl From<Vec<RuleEntry>> for RulesInput {
    fn from(entries: Vec<RuleEntry>) -> Self {
        RulesInput::List(entries.into_iter().map(RulesInput::from).collect())
    }
}

impl From<Map<String, Value>> for RulesInput {
    fn from(map: Map<String, Value>) -> Self {
        RulesInput::Mapping(map)
    }
}

impl From<Value> for RulesInput {
    fn from(value: Value) -> Self {
        RulesInput::Json(value)
    }
}
