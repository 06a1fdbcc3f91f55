//! Generate and prompt command implementations.

use crate::cli::{GenerateArgs, RulesArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use shadow_generator::{files, RulesInput, ShadowAi};
use shadow_llm::MockProvider;
use shadow_rules::{library, LlmProvider, Rule, RuleCombination, RuleEntry, RulePackage};
use tracing::debug;

/// Execute the generate command.
pub fn execute_generate(args: GenerateArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let mut generator_config = config.generator.clone();
    if let Some(model) = &args.model {
        generator_config.model_id = model.clone();
    }

    let output = match &args.mock {
        Some(response) => {
            let llm = MockProvider::new(response.as_str()).with_model_id(&generator_config.model_id);
            render_generate(&ShadowAi::new(llm), &args, config, formatter)?
        }
        None => {
            let ai = ShadowAi::from_config(&generator_config)?;
            render_generate(&ai, &args, config, formatter)?
        }
    };

    println!("{}", output);
    Ok(())
}

/// Execute the prompt command.
pub fn execute_prompt(args: RulesArgs, config: &Config) -> Result<()> {
    println!("{}", render_prompt(&args, config)?);
    Ok(())
}

/// Run generation and render the result for the terminal.
pub fn render_generate<L: LlmProvider>(
    ai: &ShadowAi<L>,
    args: &GenerateArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<String> {
    let input = build_input(&args.rules)?;
    let count = args.rules.count.unwrap_or(config.generator.default_count);

    if args.envelope {
        let envelope = ai.generate_formatted(input, count);
        let rendered = formatter.format_envelope(&envelope)?;
        if !envelope.success {
            return Err(CliError::GenerationFailed(rendered));
        }
        return Ok(rendered);
    }

    let data = ai.generate(input, count)?;
    if args.json {
        Ok(serde_json::to_string_pretty(&data)?)
    } else {
        formatter.format_data(&data)
    }
}

/// Build the prompt without calling the model.
pub fn render_prompt(args: &RulesArgs, config: &Config) -> Result<String> {
    let input = build_input(args)?;
    let count = args.count.unwrap_or(config.generator.default_count);
    // No model call happens, so a mock provider is enough
    Ok(ShadowAi::new(MockProvider::default()).build_prompt(input, count)?)
}

/// Collect rules from a rule file, built-in names and field arguments, in that order.
pub fn build_input(args: &RulesArgs) -> Result<RulesInput> {
    let mut entries: Vec<RuleEntry> = Vec::new();

    if let Some(path) = &args.rules {
        entries.extend(files::load_rules(path)?);
    }

    for name in &args.package {
        let entry = library::lookup(name).ok_or_else(|| {
            CliError::InvalidInput(format!(
                "Unknown built-in '{}' (see `shadow library`)",
                name
            ))
        })?;
        entries.push(entry);
    }

    for field in &args.fields {
        entries.push(parse_field(field)?);
    }

    if entries.is_empty() {
        return Err(CliError::InvalidInput(
            "Specify at least one field, --rules FILE or --package NAME".to_string(),
        ));
    }

    debug!("Collected {} rule(s) from the command line", entries.len());
    Ok(entries.into())
}

/// Parse one field argument in any shorthand form.
pub fn parse_field(text: &str) -> Result<RuleEntry> {
    let head_has_colon = |head: &str| head.contains(':');

    if let Some((head, _)) = text.split_once('=') {
        if !head_has_colon(head) {
            return Ok(RuleCombination::simple(text)?.into());
        }
    }
    if let Some((head, _)) = text.split_once('[') {
        if !head_has_colon(head) && text.trim_end().ends_with(']') {
            return Ok(RulePackage::simple(text)?.into());
        }
    }
    Ok(Rule::simple(text)?.into())
}
