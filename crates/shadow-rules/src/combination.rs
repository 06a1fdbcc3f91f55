//! Rule combinations - several fields merged under one strategy

use crate::error::{Result, ValidationError};
use crate::mapping;
use crate::naming::combination_description;
use crate::rule::{Rule, RuleType};
use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};

/// Default combination strategy tag
pub const DEFAULT_COMBINATION_LOGIC: &str = "combine";

/// A member of a combination: a plain field name or a full rule
///
/// Combinations never nest other combinations.
#[derive(Debug, Clone, PartialEq)]
pub enum CombinationMember {
    /// Plain field name
    Field(String),
    /// Rule carried by value
    Rule(Rule),
}

impl CombinationMember {
    /// Field name of the member
    pub fn name(&self) -> &str {
        match self {
            CombinationMember::Field(name) => name,
            CombinationMember::Rule(rule) => rule.name(),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            CombinationMember::Field(name) => json!(name),
            CombinationMember::Rule(rule) => rule.to_value(),
        }
    }

    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(name) => Ok(CombinationMember::Field(name.clone())),
            Value::Object(obj) => Ok(CombinationMember::Rule(Rule::from_map(obj)?)),
            _ => Err(mapping::invalid("rules", "a list of field names or rule mappings")),
        }
    }
}

impl From<&str> for CombinationMember {
    fn from(name: &str) -> Self {
        CombinationMember::Field(name.to_string())
    }
}

impl From<String> for CombinationMember {
    fn from(name: String) -> Self {
        CombinationMember::Field(name)
    }
}

impl From<Rule> for CombinationMember {
    fn from(rule: Rule) -> Self {
        CombinationMember::Rule(rule)
    }
}

/// Named group of rules combined under a declared strategy
///
/// # Examples
///
/// ```
/// use shadow_rules::RuleCombination;
///
/// let combo = RuleCombination::quick("contact_info", ["email", "phone"]).unwrap();
/// assert_eq!(combo.description(), "Combine email, phone to create contact info");
/// assert_eq!(combo.combination_logic(), "combine");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RuleCombination {
    name: String,
    description: String,
    rules: Vec<CombinationMember>,
    combination_logic: String,
    description_is_generated: bool,
}

impl RuleCombination {
    /// Create a combination with a generated description
    pub fn new<I, M>(name: impl Into<String>, rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = M>,
        M: Into<CombinationMember>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName { kind: "combination" });
        }
        Ok(Self::unchecked(name, rules.into_iter().map(Into::into).collect()))
    }

    /// Build from a name known to be valid (built-in library only)
    pub(crate) fn unchecked(name: impl Into<String>, rules: Vec<CombinationMember>) -> Self {
        let name = name.into();
        Self {
            description: combination_description(&name, &member_names(&rules)),
            name,
            rules,
            combination_logic: DEFAULT_COMBINATION_LOGIC.to_string(),
            description_is_generated: true,
        }
    }

    /// Create a combination from plain field names
    pub fn quick<I, S>(name: impl Into<String>, fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, fields.into_iter().map(|f| CombinationMember::Field(f.into())))
    }

    /// Parse `"full_name = first_name + last_name"`
    pub fn simple(text: &str) -> Result<Self> {
        let (name, members) = text.split_once('=').ok_or_else(|| {
            ValidationError::InvalidShorthand(format!(
                "expected 'name = field + field', got '{}'",
                text
            ))
        })?;

        let fields: Vec<String> = members
            .split('+')
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect();

        Self::quick(name.trim(), fields)
    }

    /// Replace the description; an empty string restores the generated one
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        if description.is_empty() {
            self.description_is_generated = true;
            self.refresh_description();
        } else {
            self.description = description;
            self.description_is_generated = false;
        }
        self
    }

    /// Set the combination strategy tag
    pub fn with_logic(mut self, logic: impl Into<String>) -> Self {
        self.combination_logic = logic.into();
        self
    }

    /// Append a member; a generated description is recomputed
    pub fn add_rule(mut self, member: impl Into<CombinationMember>) -> Self {
        self.rules.push(member.into());
        self.refresh_description();
        self
    }

    /// Combination name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description (explicit or generated)
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Members in declaration order
    pub fn rules(&self) -> &[CombinationMember] {
        &self.rules
    }

    /// Strategy tag
    pub fn combination_logic(&self) -> &str {
        &self.combination_logic
    }

    /// Field names of all members, in order
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(CombinationMember::name).collect()
    }

    /// Render as a labeled prompt block
    ///
    /// Nested rules are listed by name only.
    pub fn to_prompt(&self) -> String {
        format!(
            "Combination: {}\n  Description: {}\n  Type: {}\n  Logic: {}\n  Fields: {}",
            self.name,
            self.description,
            RuleType::Combination,
            self.combination_logic,
            self.rule_names().join(", ")
        )
        .trim_end()
        .to_string()
    }

    /// Serialize into the rule-file mapping shape
    pub fn to_value(&self) -> Value {
        let rules: Vec<Value> = self.rules.iter().map(CombinationMember::to_value).collect();
        json!({
            "name": self.name,
            "description": self.description,
            "rule_type": RuleType::Combination.as_str(),
            "rules": rules,
            "combination_logic": self.combination_logic,
        })
    }

    /// Rebuild from a decoded mapping
    pub fn from_map(obj: &Map<String, Value>) -> Result<Self> {
        let rules = mapping::members(obj)?
            .iter()
            .map(CombinationMember::from_value)
            .collect::<Result<Vec<_>>>()?;

        let mut combo = Self::new(mapping::name(obj)?, rules)?;
        if let Some(description) = mapping::non_empty(mapping::opt_string(obj, "description")?) {
            // A stored copy of the generated text stays generated
            if description != combo.description {
                combo = combo.with_description(description);
            }
        }
        if let Some(logic) = mapping::opt_string(obj, "combination_logic")? {
            combo = combo.with_logic(logic);
        }
        Ok(combo)
    }

    fn refresh_description(&mut self) {
        if self.description_is_generated {
            self.description = combination_description(&self.name, &member_names(&self.rules));
        }
    }
}

impl Serialize for RuleCombination {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

fn member_names(rules: &[CombinationMember]) -> Vec<&str> {
    rules.iter().map(CombinationMember::name).collect()
}
