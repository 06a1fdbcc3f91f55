//! Rule packages - named collections describing a whole record shape

use crate::combination::RuleCombination;
use crate::error::{Result, ValidationError};
use crate::mapping;
use crate::naming::package_description;
use crate::rule::{Rule, RuleType};
use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};

/// Default package version
pub const DEFAULT_PACKAGE_VERSION: &str = "1.0.0";

/// A member of a package
#[derive(Debug, Clone, PartialEq)]
pub enum PackageMember {
    /// Plain field name
    Field(String),
    /// Rule carried by value
    Rule(Rule),
    /// Combination carried by value
    Combination(RuleCombination),
}

impl PackageMember {
    /// Identifier of the member; combinations contribute their own name
    pub fn name(&self) -> &str {
        match self {
            PackageMember::Field(name) => name,
            PackageMember::Rule(rule) => rule.name(),
            PackageMember::Combination(combo) => combo.name(),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            PackageMember::Field(name) => json!(name),
            PackageMember::Rule(rule) => rule.to_value(),
            PackageMember::Combination(combo) => combo.to_value(),
        }
    }

    fn from_value(value: &Value) -> Result<Self> {
        let obj = match value {
            Value::String(name) => return Ok(PackageMember::Field(name.clone())),
            Value::Object(obj) => obj,
            _ => {
                return Err(mapping::invalid(
                    "rules",
                    "a list of field names, rules or combinations",
                ))
            }
        };

        let rule_type: RuleType = match mapping::opt_string(obj, "rule_type")? {
            Some(raw) => raw.parse()?,
            None => RuleType::Record,
        };
        match rule_type {
            RuleType::Record => Ok(PackageMember::Rule(Rule::from_map(obj)?)),
            RuleType::Combination => Ok(PackageMember::Combination(RuleCombination::from_map(obj)?)),
            RuleType::Package => Err(mapping::invalid("rules", "no nested packages")),
        }
    }
}

impl From<&str> for PackageMember {
    fn from(name: &str) -> Self {
        PackageMember::Field(name.to_string())
    }
}

impl From<String> for PackageMember {
    fn from(name: String) -> Self {
        PackageMember::Field(name)
    }
}

impl From<Rule> for PackageMember {
    fn from(rule: Rule) -> Self {
        PackageMember::Rule(rule)
    }
}

impl From<RuleCombination> for PackageMember {
    fn from(combo: RuleCombination) -> Self {
        PackageMember::Combination(combo)
    }
}

/// Named collection of rules, combinations and plain field names
///
/// # Examples
///
/// ```
/// use shadow_rules::RulePackage;
///
/// let package = RulePackage::quick("employee", ["name", "department"])
///     .unwrap()
///     .with_category("hr")
///     .with_version("2.1.0");
///
/// assert_eq!(package.description(), "A collection of rules for employee");
/// assert_eq!(package.category(), Some("hr"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RulePackage {
    name: String,
    description: String,
    rules: Vec<PackageMember>,
    category: Option<String>,
    version: String,
}

impl RulePackage {
    /// Create a package with a generated description
    pub fn new<I, M>(name: impl Into<String>, rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = M>,
        M: Into<PackageMember>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName { kind: "package" });
        }
        Ok(Self::unchecked(name, rules.into_iter().map(Into::into).collect()))
    }

    /// Build from a name known to be valid (built-in library only)
    pub(crate) fn unchecked(name: impl Into<String>, rules: Vec<PackageMember>) -> Self {
        let name = name.into();
        Self {
            description: package_description(&name),
            name,
            rules,
            category: None,
            version: DEFAULT_PACKAGE_VERSION.to_string(),
        }
    }

    /// Create a package from plain field names
    pub fn quick<I, S>(name: impl Into<String>, fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, fields.into_iter().map(|f| PackageMember::Field(f.into())))
    }

    /// Create a package from existing members
    pub fn from_rules(name: impl Into<String>, members: Vec<PackageMember>) -> Result<Self> {
        Self::new(name, members)
    }

    /// Parse `"person [name, email, age]"`
    pub fn simple(text: &str) -> Result<Self> {
        let shorthand_error = || {
            ValidationError::InvalidShorthand(format!(
                "expected 'name [field, field]', got '{}'",
                text
            ))
        };

        let (name, rest) = text.split_once('[').ok_or_else(shorthand_error)?;
        let list = rest.trim_end().strip_suffix(']').ok_or_else(shorthand_error)?;

        let fields: Vec<String> = list
            .split(',')
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect();

        Self::quick(name.trim(), fields)
    }

    /// Replace the description; an empty string restores the generated one
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.is_empty() {
            package_description(&self.name)
        } else {
            description
        };
        self
    }

    /// Append a member
    pub fn add_rule(mut self, member: impl Into<PackageMember>) -> Self {
        self.rules.push(member.into());
        self
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the version string
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Package name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description (explicit or generated)
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Members in declaration order
    pub fn rules(&self) -> &[PackageMember] {
        &self.rules
    }

    /// Optional category
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Version string
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Flat member identifiers, in order
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(PackageMember::name).collect()
    }

    /// Render as a labeled prompt block
    pub fn to_prompt(&self) -> String {
        let mut block = format!("Package: {}\n  Description: {}", self.name, self.description);
        if let Some(category) = &self.category {
            block.push_str(&format!("\n  Category: {}", category));
        }
        block.push_str(&format!("\n  Fields: {}", self.rule_names().join(", ")));
        block.trim_end().to_string()
    }

    /// Serialize into the rule-file mapping shape
    pub fn to_value(&self) -> Value {
        let rules: Vec<Value> = self.rules.iter().map(PackageMember::to_value).collect();
        json!({
            "name": self.name,
            "description": self.description,
            "rule_type": RuleType::Package.as_str(),
            "rules": rules,
            "category": self.category,
            "version": self.version,
        })
    }

    /// Rebuild from a decoded mapping
    pub fn from_map(obj: &Map<String, Value>) -> Result<Self> {
        let rules = mapping::members(obj)?
            .iter()
            .map(PackageMember::from_value)
            .collect::<Result<Vec<_>>>()?;

        let mut package = Self::new(mapping::name(obj)?, rules)?;
        if let Some(description) = mapping::non_empty(mapping::opt_string(obj, "description")?) {
            package = package.with_description(description);
        }
        package.category = mapping::opt_string(obj, "category")?;
        if let Some(version) = mapping::opt_string(obj, "version")? {
            package = package.with_version(version);
        }
        Ok(package)
    }
}

impl Serialize for RulePackage {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_package() {
        let package = RulePackage::quick("person", ["name", "email", "age"]).unwrap();
        assert_eq!(package.name(), "person");
        assert_eq!(package.description(), "A collection of rules for person");
        assert_eq!(package.rule_names(), ["name", "email", "age"]);
        assert_eq!(package.category(), None);
        assert_eq!(package.version(), "1.0.0");
    }

    #[test]
    fn test_mixed_members() {
        let rule = Rule::new("name").unwrap();
        let combo = RuleCombination::quick("contact", ["email", "phone"]).unwrap();
        let package = RulePackage::from_rules(
            "mixed_package",
            vec![rule.clone().into(), combo.clone().into(), "age".into(), "location".into()],
        )
        .unwrap();

        assert_eq!(package.rules().len(), 4);
        assert_eq!(package.rules()[0], PackageMember::Rule(rule));
        assert_eq!(package.rules()[1], PackageMember::Combination(combo));
        assert_eq!(package.rule_names(), ["name", "contact", "age", "location"]);
    }

    #[test]
    fn test_empty_package_is_valid() {
        let package = RulePackage::quick("empty", Vec::<String>::new()).unwrap();
        assert!(package.rules().is_empty());
        assert_eq!(
            package.to_prompt(),
            "Package: empty\n  Description: A collection of rules for empty\n  Fields:"
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(
            RulePackage::quick("", ["name"]).unwrap_err(),
            ValidationError::EmptyName { kind: "package" }
        );
    }

    #[test]
    fn test_simple_parsing() {
        let package = RulePackage::simple("person [name, email, age, phone]").unwrap();
        assert_eq!(package.name(), "person");
        assert_eq!(package.rule_names(), ["name", "email", "age", "phone"]);

        assert!(RulePackage::simple("person name, email").is_err());
        assert!(RulePackage::simple("person [name, email").is_err());
    }

    #[test]
    fn test_chain_methods() {
        let package = RulePackage::quick("product", ["name", "price"])
            .unwrap()
            .add_rule("description")
            .with_category("products")
            .with_version("1.5.0");

        assert_eq!(package.rules().len(), 3);
        assert_eq!(package.category(), Some("products"));
        assert_eq!(package.version(), "1.5.0");
    }

    #[test]
    fn test_to_prompt_with_category() {
        let package = RulePackage::quick("employee", ["name", "department"])
            .unwrap()
            .with_category("hr");
        let prompt = package.to_prompt();
        assert!(prompt.contains("Package: employee"));
        assert!(prompt.contains("Category: hr"));
        assert!(prompt.contains("Fields: name, department"));
    }

    #[test]
    fn test_value_round_trip() {
        let package = RulePackage::from_rules(
            "profile",
            vec![
                Rule::new("first_name").unwrap().into(),
                RuleCombination::quick("contact", ["email", "phone"]).unwrap().into(),
                "age".into(),
            ],
        )
        .unwrap()
        .with_category("users")
        .with_version("2.0.0");

        let value = package.to_value();
        assert_eq!(value["rules"][1]["rule_type"], "combination");
        assert_eq!(value["version"], "2.0.0");

        let parsed = RulePackage::from_map(value.as_object().unwrap()).unwrap();
        assert_eq!(parsed, package);
    }

    #[test]
    fn test_from_map_rejects_nested_package() {
        let value = json!({
            "name": "outer",
            "rules": [{"name": "inner", "rule_type": "package"}]
        });
        assert!(RulePackage::from_map(value.as_object().unwrap()).is_err());
    }
}
