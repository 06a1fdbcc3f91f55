//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ShadowAI CLI - Generate mock data from field rules with an LLM.
#[derive(Debug, Parser)]
#[command(name = "shadow")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "SHADOW_AI_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate mock data
    Generate(GenerateArgs),

    /// Print the prompt that would be sent, without calling the model
    Prompt(RulesArgs),

    /// Work with rule files
    Rules(RuleFileArgs),

    /// List built-in rules, combinations and packages
    Library,
}

/// Rule sources shared by `generate` and `prompt`.
///
/// Fields accept the shorthand forms `name`, `name: description`,
/// `name|a,b,c`, `name = a + b` and `name [a, b]`.
#[derive(Debug, Parser)]
pub struct RulesArgs {
    /// Fields to generate
    pub fields: Vec<String>,

    /// Number of records (defaults to the configured default_count)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Load rules from a JSON or YAML file
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// Include a built-in rule or package by name (repeatable)
    #[arg(short, long)]
    pub package: Vec<String>,
}

/// Arguments for the generate command.
#[derive(Debug, Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub rules: RulesArgs,

    /// Print raw JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Print the full result envelope as JSON
    #[arg(long, conflicts_with = "json")]
    pub envelope: bool,

    /// Override the model identifier
    #[arg(short, long)]
    pub model: Option<String>,

    /// Use a canned model reply instead of calling the API
    #[arg(long, value_name = "RESPONSE")]
    pub mock: Option<String>,
}

/// Arguments for rule file management.
#[derive(Debug, Parser)]
pub struct RuleFileArgs {
    #[command(subcommand)]
    pub action: RuleFileAction,
}

/// Rule file actions.
#[derive(Debug, Subcommand)]
pub enum RuleFileAction {
    /// Print a starter rule mapping
    Template {
        /// Rule type
        #[arg(value_enum)]
        rule_type: RuleTypeArg,

        /// Write the template to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the rules in a file
    Show {
        /// JSON or YAML rule file
        file: PathBuf,
    },
}

/// Rule type argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RuleTypeArg {
    /// Single field
    Record,
    /// Fields combined under a strategy
    Combination,
    /// Named collection of fields
    Package,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

impl From<RuleTypeArg> for shadow_rules::RuleType {
    fn from(rule_type: RuleTypeArg) -> Self {
        match rule_type {
            RuleTypeArg::Record => shadow_rules::RuleType::Record,
            RuleTypeArg::Combination => shadow_rules::RuleType::Combination,
            RuleTypeArg::Package => shadow_rules::RuleType::Package,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_command() {
        let cli = Cli::parse_from([
            "shadow",
            "generate",
            "name",
            "email: work email",
            "--count",
            "3",
            "--package",
            "person",
            "--json",
        ]);
        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.rules.fields, ["name", "email: work email"]);
                assert_eq!(args.rules.count, Some(3));
                assert_eq!(args.rules.package, ["person"]);
                assert!(args.json);
                assert!(!args.envelope);
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_json_conflicts_with_envelope() {
        assert!(Cli::try_parse_from(["shadow", "generate", "a", "--json", "--envelope"]).is_err());
    }

    #[test]
    fn test_rules_template_command() {
        let cli = Cli::parse_from(["shadow", "rules", "template", "combination"]);
        match cli.command {
            Command::Rules(RuleFileArgs {
                action: RuleFileAction::Template { rule_type, output },
            }) => {
                assert_eq!(rule_type, RuleTypeArg::Combination);
                assert!(output.is_none());
            }
            _ => panic!("Expected rules template command"),
        }
    }

    #[test]
    fn test_global_format() {
        let cli = Cli::parse_from(["shadow", "library", "--format", "json", "--no-color"]);
        assert_eq!(cli.format, Some(CliFormat::Json));
        assert!(cli.no_color);
        assert!(matches!(cli.command, Command::Library));
    }

    #[test]
    fn test_rule_type_conversion() {
        let rule_type: shadow_rules::RuleType = RuleTypeArg::Package.into();
        assert_eq!(rule_type, shadow_rules::RuleType::Package);
    }
}
