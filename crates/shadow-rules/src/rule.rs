//! Rule module - the atomic field specification

use crate::error::{Result, ValidationError};
use crate::mapping;
use crate::naming::record_description;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};
use std::fmt;

/// Kind of rule entity, serialized as `record`, `combination` or `package`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RuleType {
    /// A single field
    #[default]
    Record,

    /// A group of fields combined under a strategy
    Combination,

    /// A named collection describing a whole record shape
    Package,
}

impl RuleType {
    /// Get the rule type as its serialized string
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleType::Record => "record",
            RuleType::Combination => "combination",
            RuleType::Package => "package",
        }
    }

    /// Parse a rule type (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "record" => Some(RuleType::Record),
            "combination" => Some(RuleType::Combination),
            "package" => Some(RuleType::Package),
            _ => None,
        }
    }
}

impl std::str::FromStr for RuleType {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ValidationError::InvalidRuleType(s.to_string()))
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RuleType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A named field specification for mock-data generation
///
/// # Examples
///
/// ```
/// use shadow_rules::Rule;
///
/// let rule = Rule::new("age")
///     .unwrap()
///     .with_constraint("min", 18)
///     .with_constraint("max", 65);
///
/// assert_eq!(rule.description(), "Generate a age");
/// assert!(rule.to_prompt().contains("min: 18"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    name: String,
    description: String,
    examples: Option<Vec<String>>,
    constraints: Option<IndexMap<String, Value>>,
    rule_type: RuleType,
}

impl Rule {
    /// Create a record rule with an auto-generated description
    ///
    /// # Errors
    /// Returns `ValidationError::EmptyName` if `name` is empty or whitespace
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName { kind: "rule" });
        }
        Ok(Self::unchecked(name))
    }

    /// Build a rule from a name known to be valid (built-in library only)
    pub(crate) fn unchecked(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            description: record_description(&name),
            name,
            examples: None,
            constraints: None,
            rule_type: RuleType::Record,
        }
    }

    /// Parse the shorthand forms used for quick rule declaration
    ///
    /// - `"email"` declares a field
    /// - `"email: user email address"` declares a field with a description
    /// - `"color|red,blue,green"` declares a field with examples
    ///
    /// ```
    /// use shadow_rules::Rule;
    ///
    /// let rule = Rule::simple("color|red,blue,green").unwrap();
    /// assert_eq!(rule.name(), "color");
    /// assert_eq!(rule.examples().unwrap(), ["red", "blue", "green"]);
    /// ```
    pub fn simple(text: &str) -> Result<Self> {
        let (head, examples) = match text.split_once('|') {
            Some((head, list)) => {
                let examples: Vec<String> = list
                    .split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(str::to_string)
                    .collect();
                (head, Some(examples))
            }
            None => (text, None),
        };

        let (name, description) = match head.split_once(':') {
            Some((name, description)) => (name.trim(), Some(description.trim())),
            None => (head.trim(), None),
        };

        let mut rule = Self::new(name)?;
        if let Some(description) = description.filter(|d| !d.is_empty()) {
            rule = rule.with_description(description);
        }
        if let Some(examples) = examples.filter(|e| !e.is_empty()) {
            rule = rule.with_examples(examples);
        }
        Ok(rule)
    }

    /// Replace the description; an empty string restores the generated one
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.is_empty() {
            record_description(&self.name)
        } else {
            description
        };
        self
    }

    /// Replace the example values
    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = Some(examples.into_iter().map(Into::into).collect());
        self
    }

    /// Add or overwrite a single constraint
    pub fn with_constraint(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.constraints
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Merge several constraints, keeping declaration order
    pub fn with_constraints<I, K, V>(mut self, constraints: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let map = self.constraints.get_or_insert_with(IndexMap::new);
        for (key, value) in constraints {
            map.insert(key.into(), value.into());
        }
        self
    }

    /// Override the rule type tag
    pub fn with_rule_type(mut self, rule_type: RuleType) -> Self {
        self.rule_type = rule_type;
        self
    }

    /// Field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description (explicit or generated)
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Example values, if any were declared
    pub fn examples(&self) -> Option<&[String]> {
        self.examples.as_deref()
    }

    /// Constraints, if any were declared
    pub fn constraints(&self) -> Option<&IndexMap<String, Value>> {
        self.constraints.as_ref()
    }

    /// Rule type tag
    pub fn rule_type(&self) -> RuleType {
        self.rule_type
    }

    /// Render the rule as one prompt line
    ///
    /// Format: `name: description (Examples: a, b) (Constraints: k: v)`
    pub fn to_prompt(&self) -> String {
        let mut line = format!("{}: {}", self.name, self.description);

        if let Some(examples) = self.examples.as_ref().filter(|e| !e.is_empty()) {
            line.push_str(&format!(" (Examples: {})", examples.join(", ")));
        }

        if let Some(constraints) = self.constraints.as_ref().filter(|c| !c.is_empty()) {
            let rendered: Vec<String> = constraints
                .iter()
                .map(|(key, value)| format!("{}: {}", key, render_value(value)))
                .collect();
            line.push_str(&format!(" (Constraints: {})", rendered.join(", ")));
        }

        line
    }

    /// Serialize into the rule-file mapping shape
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("name".into(), json!(self.name));
        obj.insert("description".into(), json!(self.description));
        obj.insert("rule_type".into(), json!(self.rule_type.as_str()));
        if let Some(examples) = &self.examples {
            obj.insert("examples".into(), json!(examples));
        }
        if let Some(constraints) = &self.constraints {
            let map: Map<String, Value> = constraints
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            obj.insert("constraints".into(), Value::Object(map));
        }
        Value::Object(obj)
    }

    /// Rebuild a rule from a decoded mapping
    ///
    /// Only `name` is required; a missing or empty description is generated.
    pub fn from_map(obj: &Map<String, Value>) -> Result<Self> {
        let mut rule = Self::new(mapping::name(obj)?)?;

        if let Some(description) = mapping::non_empty(mapping::opt_string(obj, "description")?) {
            rule = rule.with_description(description);
        }
        if let Some(raw) = mapping::opt_string(obj, "rule_type")? {
            rule.rule_type = raw.parse()?;
        }
        rule.examples = mapping::opt_string_list(obj, "examples")?;
        rule.constraints = mapping::opt_object(obj, "constraints")?
            .map(|map| map.iter().map(|(k, v)| (k.clone(), v.clone())).collect());

        Ok(rule)
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

/// Strings render bare, everything else as compact JSON
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
