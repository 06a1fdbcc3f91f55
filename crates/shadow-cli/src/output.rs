//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use serde_json::{Map, Value};
use shadow_generator::{MockData, ResultEnvelope};
use shadow_rules::{FieldSpec, RuleEntry};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format generated records.
    pub fn format_data(&self, data: &MockData) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
            OutputFormat::Table => Ok(self.format_records_table(&data.records())),
        }
    }

    /// Format a result envelope (always JSON).
    pub fn format_envelope(&self, envelope: &ResultEnvelope) -> Result<String> {
        Ok(envelope.to_json_pretty()?)
    }

    /// Format rule entries.
    pub fn format_entries(&self, entries: &[RuleEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<Value> = entries.iter().map(RuleEntry::to_value).collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Table => Ok(self.format_entries_table(entries)),
        }
    }

    /// Records as a table; columns follow first appearance of each key.
    fn format_records_table(&self, records: &[&Map<String, Value>]) -> String {
        if records.is_empty() {
            return self.colorize("No records generated.", "yellow");
        }

        let mut columns: Vec<&str> = Vec::new();
        for record in records {
            for key in record.keys() {
                if !columns.contains(&key.as_str()) {
                    columns.push(key);
                }
            }
        }

        let mut builder = Builder::default();
        builder.push_record(columns.iter().copied());
        for record in records {
            builder.push_record(
                columns
                    .iter()
                    .map(|column| record.get(*column).map(render_cell).unwrap_or_default()),
            );
        }

        self.finish_table(builder)
    }

    fn format_entries_table(&self, entries: &[RuleEntry]) -> String {
        if entries.is_empty() {
            return self.colorize("No rules found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Name", "Type", "Description", "Fields"]);
        for entry in entries {
            let fields = match entry {
                RuleEntry::Record(_) => String::new(),
                RuleEntry::Combination(combo) => combo.rule_names().join(", "),
                RuleEntry::Package(package) => package.rule_names().join(", "),
            };
            builder.push_record([
                entry.name().to_string(),
                entry.rule_type().to_string(),
                entry.description().to_string(),
                fields,
            ]);
        }

        self.finish_table(builder)
    }

    fn finish_table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Strings render bare, everything else as compact JSON.
fn render_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
