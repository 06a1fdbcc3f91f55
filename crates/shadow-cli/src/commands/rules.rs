//! Rule file command implementations.

use crate::cli::{RuleFileAction, RuleFileArgs};
use crate::error::Result;
use crate::output::Formatter;
use shadow_generator::files;
use std::fs;

/// Execute a rules subcommand.
pub fn execute_rules(args: RuleFileArgs, formatter: &Formatter) -> Result<()> {
    match args.action {
        RuleFileAction::Template { rule_type, output } => {
            let template = serde_json::to_string_pretty(&files::rule_template(rule_type.into()))?;
            match output {
                Some(path) => {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        fs::create_dir_all(parent)?;
                    }
                    fs::write(&path, format!("{}\n", template))?;
                    println!("{}", formatter.success(&format!("Template written to {}", path.display())));
                }
                None => println!("{}", template),
            }
        }
        RuleFileAction::Show { file } => {
            let entries = files::load_rules(&file)?;
            println!("{}", formatter.format_entries(&entries)?);
            println!(
                "{}",
                formatter.info(&format!("{} rule(s) in {}", entries.len(), file.display()))
            );
        }
    }
    Ok(())
}
