//! Schema setup command

use anyhow::{Context, Result};
use clap::Parser;

use hackreg_core::HackregConfig;
use hackreg_server::db::{create_pool, migrations};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides config/environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Create the collections if they do not exist yet
pub async fn run_migrate(args: MigrateArgs, config: HackregConfig) -> Result<()> {
    let database_url = args
        .database_url
        .or(config.database.url)
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ~/.hackreg/config.toml")?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;

    migrations::run(&pool)
        .await
        .context("Failed to apply schema")?;

    tracing::info!("Schema is up to date");
    pool.close().await;
    Ok(())
}
