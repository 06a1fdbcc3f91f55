//! Built-in rules, combinations and packages
//!
//! Ready-made definitions for the most common mock-data fields. Every
//! function returns a fresh value, so callers may customize the result with
//! the usual builder methods.

use crate::combination::{CombinationMember, RuleCombination};
use crate::entry::RuleEntry;
use crate::package::{PackageMember, RulePackage};
use crate::rule::Rule;

/// Email address
pub fn email() -> Rule {
    Rule::unchecked("email")
        .with_description("Generate a realistic email address")
        .with_examples(["john.doe@example.com", "jane.smith@company.org"])
        .with_constraint("format", "email")
}

/// Given name
pub fn first_name() -> Rule {
    Rule::unchecked("first_name")
        .with_description("Generate a realistic first name")
        .with_examples(["John", "Jane", "Michael", "Sarah"])
}

/// Family name
pub fn last_name() -> Rule {
    Rule::unchecked("last_name")
        .with_description("Generate a realistic last name")
        .with_examples(["Smith", "Johnson", "Williams", "Brown"])
}

/// Adult age in years
pub fn age() -> Rule {
    Rule::unchecked("age")
        .with_description("Generate a realistic adult age")
        .with_constraints([("type", "integer")])
        .with_constraint("min", 18)
        .with_constraint("max", 80)
}

/// Phone number
pub fn phone() -> Rule {
    Rule::unchecked("phone")
        .with_description("Generate a phone number")
        .with_examples(["+1-555-123-4567", "(555) 987-6543"])
}

/// Street address
pub fn address() -> Rule {
    Rule::unchecked("address")
        .with_description("Generate a full street address")
        .with_examples(["123 Main St, Springfield, IL 62701"])
}

/// Company name
pub fn company() -> Rule {
    Rule::unchecked("company")
        .with_description("Generate a company name")
        .with_examples(["Acme Corp", "Globex Inc", "Initech"])
}

/// First and last name combined
pub fn full_name() -> RuleCombination {
    RuleCombination::unchecked(
        "full_name",
        vec![
            CombinationMember::Rule(first_name()),
            CombinationMember::Rule(last_name()),
        ],
    )
    .with_description("Combine first name and last name into a full name")
}

/// Basic person record
pub fn person() -> RulePackage {
    RulePackage::unchecked(
        "person",
        vec![
            PackageMember::Combination(full_name()),
            PackageMember::Rule(email()),
            PackageMember::Rule(age()),
            PackageMember::Rule(phone()),
        ],
    )
    .with_description("Basic personal information")
    .with_category("person")
}

/// Company profile record
pub fn company_profile() -> RulePackage {
    RulePackage::unchecked(
        "company_profile",
        vec![
            PackageMember::Rule(company()),
            PackageMember::Rule(address()),
            PackageMember::Rule(phone()),
            PackageMember::Field("industry".to_string()),
            PackageMember::Field("employee_count".to_string()),
        ],
    )
    .with_description("Company contact and profile information")
    .with_category("business")
}

/// Names of every built-in definition, in listing order
pub fn names() -> &'static [&'static str] {
    &[
        "email",
        "first_name",
        "last_name",
        "age",
        "phone",
        "address",
        "company",
        "full_name",
        "person",
        "company_profile",
    ]
}

/// Look up a built-in definition by name
pub fn lookup(name: &str) -> Option<RuleEntry> {
    let entry = match name {
        "email" => email().into(),
        "first_name" => first_name().into(),
        "last_name" => last_name().into(),
        "age" => age().into(),
        "phone" => phone().into(),
        "address" => address().into(),
        "company" => company().into(),
        "full_name" => full_name().into(),
        "person" => person().into(),
        "company_profile" => company_profile().into(),
        _ => return None,
    };
    Some(entry)
}
