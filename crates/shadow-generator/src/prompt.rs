//! LLM prompt engineering for mock-data generation

use shadow_rules::{FieldSpec, RuleEntry};

/// Builds the generation instruction for the model
///
/// Stateless and deterministic: the same rules and count always give
/// byte-identical output.
pub struct PromptBuilder<'a> {
    rules: &'a [RuleEntry],
    count: usize,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(rules: &'a [RuleEntry], count: usize) -> Self {
        Self { rules, count }
    }

    /// Build the complete generation prompt
    pub fn build(&self) -> String {
        let mut prompt = format!(
            "Generate {} record(s) of mock data with the following fields:\n",
            self.count
        );

        for entry in self.rules {
            prompt.push_str("- ");
            prompt.push_str(&entry.to_prompt());
            prompt.push('\n');
        }

        prompt.push('\n');
        prompt.push_str(OUTPUT_FORMAT_INSTRUCTIONS);
        prompt.push('\n');
        prompt.push_str(&self.shape_instruction());
        prompt
    }

    fn shape_instruction(&self) -> String {
        if self.count == 1 {
            "Generate a single JSON object with realistic values for every field.".to_string()
        } else {
            format!(
                "Generate an array of {} JSON objects, each with realistic and varied values for every field.",
                self.count
            )
        }
    }
}

const OUTPUT_FORMAT_INSTRUCTIONS: &str = r#"Output rules:
- Return the data in FLAT JSON format: one key per field name listed above
- Combination fields appear as a single key holding the combined value
- Package fields appear as individual keys, not nested under the package name
- Return ONLY valid JSON, no markdown code blocks and no additional commentary"#;
