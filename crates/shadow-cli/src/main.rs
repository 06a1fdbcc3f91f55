//! ShadowAI CLI - Generate mock data from field rules with an LLM.

use clap::Parser;
use shadow_cli::commands;
use shadow_cli::{Cli, CliError, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    // Pick up OPENAI_API_KEY and friends from a local .env file
    dotenvy::dotenv().ok();

    // Initialize tracing (log to stderr)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let color_enabled = !cli.no_color;

    match run(cli) {
        Ok(()) => {}
        // The failure envelope is the command's output
        Err(CliError::GenerationFailed(envelope)) => {
            println!("{}", envelope);
            std::process::exit(1);
        }
        Err(e) => {
            let formatter = Formatter::new(shadow_cli::config::OutputFormat::Table, color_enabled);
            eprintln!("{}", formatter.error(&e.to_string()));
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> shadow_cli::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Generate(args) => commands::execute_generate(args, &config, &formatter),
        Command::Prompt(args) => commands::execute_prompt(args, &config),
        Command::Rules(args) => commands::execute_rules(args, &formatter),
        Command::Library => commands::execute_library(&formatter),
    }
}
