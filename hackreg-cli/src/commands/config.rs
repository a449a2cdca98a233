//! Configuration inspection commands

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use hackreg_core::HackregConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Show the effective configuration (file, env and defaults merged)
    Show,
}

pub fn run_config(args: ConfigArgs, config: &HackregConfig) -> Result<()> {
    match args.command {
        ConfigCommands::Path => {
            println!("{}", HackregConfig::config_path().display());
        }
        ConfigCommands::Show => {
            let rendered = config
                .to_redacted_toml()
                .context("Failed to render configuration")?;
            print!("{}", rendered);
        }
    }
    Ok(())
}
