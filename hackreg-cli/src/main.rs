//! hackreg CLI - hackathon registration API
//!
//! Entry point for the `hackreg` binary:
//! - `serve`: run the HTTP API (PostgreSQL or in-memory)
//! - `migrate`: create the document tables
//! - `config`: inspect the effective configuration
//! - `completions`: generate shell completion scripts

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use hackreg_core::HackregConfig;

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "hackreg",
    author,
    version,
    about = "Hackathon listings and wallet-keyed participant profiles over HTTP"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still wins when set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create database tables and indexes
    Migrate(commands::migrate::MigrateArgs),
    /// Inspect hackreg configuration (path, show)
    Config(commands::config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

/// Load `.env` from the working directory, then `~/.hackreg/.env`.
///
/// Variables already set in the process are never overwritten.
fn load_dotenv() {
    dotenvy::dotenv().ok();
    if let Some(home) = dirs::home_dir() {
        dotenvy::from_path(home.join(".hackreg").join(".env")).ok();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, load_config()?).await?,
        Commands::Migrate(args) => commands::run_migrate(args, load_config()?).await?,
        Commands::Config(args) => commands::run_config(args, &load_config()?)?,
        Commands::Completions(args) => run_completions(args)?,
    }
    Ok(())
}

fn load_config() -> Result<HackregConfig> {
    HackregConfig::load().context("Failed to load configuration")
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());
    Ok(())
}
