//! Auto-generated descriptions derived from entity names
//!
//! These are plain string functions; the generated text is observable in
//! prompts and serialized rule files, so the wording is fixed.

/// Replace underscores with spaces: `user_name` -> `user name`
pub fn humanize(name: &str) -> String {
    name.replace('_', " ")
}

/// Default description for a record rule
///
/// ```
/// use shadow_rules::naming::record_description;
///
/// assert_eq!(record_description("company_address_line_1"), "Generate a company address line 1");
/// ```
pub fn record_description(name: &str) -> String {
    format!("Generate a {}", humanize(name))
}

/// Default description for a combination
///
/// Only the first three member identifiers are listed. Members are listed
/// verbatim (not humanized); only the combination name is humanized.
pub fn combination_description<S: AsRef<str>>(name: &str, members: &[S]) -> String {
    if members.is_empty() {
        return format!("Combination for {}", humanize(name));
    }

    let listed: Vec<&str> = members.iter().take(3).map(AsRef::as_ref).collect();
    format!("Combine {} to create {}", listed.join(", "), humanize(name))
}

/// Default description for a package
pub fn package_description(name: &str) -> String {
    format!("A collection of rules for {}", humanize(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("email"), "email");
        assert_eq!(humanize("user_name"), "user name");
        assert_eq!(humanize("a__b"), "a  b");
    }

    #[test]
    fn test_record_description() {
        assert_eq!(record_description("email"), "Generate a email");
        assert_eq!(record_description("user_name"), "Generate a user name");
    }

    #[test]
    fn test_combination_description_truncates_to_three() {
        let members = ["name", "email", "phone", "address", "age"];
        assert_eq!(
            combination_description("full_profile", &members),
            "Combine name, email, phone to create full profile"
        );
    }

    #[test]
    fn test_combination_description_keeps_member_underscores() {
        let members = ["first_name", "last_name"];
        assert_eq!(
            combination_description("full_name", &members),
            "Combine first_name, last_name to create full name"
        );
    }

    #[test]
    fn test_combination_description_empty() {
        let members: [&str; 0] = [];
        assert_eq!(
            combination_description("empty_combo", &members),
            "Combination for empty combo"
        );
    }

    #[test]
    fn test_package_description() {
        assert_eq!(
            package_description("employee_contact_info"),
            "A collection of rules for employee contact info"
        );
    }
}
