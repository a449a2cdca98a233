//! HTTP server command
//!
//! Runs the hackreg API against PostgreSQL, or against the in-memory
//! store with `--memory`.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use hackreg_core::HackregConfig;
use hackreg_server::db::{ConnectionProvider, MemoryStore};
use hackreg_server::http::{run_server, AppState, ServerConfig};
use hackreg_server::session::HeaderWalletSession;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: from config, 127.0.0.1:3030)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides config/environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Keep everything in memory, ignoring any database URL
    #[arg(long)]
    pub memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: HackregConfig) -> Result<()> {
    let mut server_config = ServerConfig::from(&config);
    if let Some(bind) = args.bind {
        server_config.bind_addr = bind;
    }
    server_config.cors_permissive |= args.cors_permissive;

    let session = HeaderWalletSession::new(&config.session.wallet_header)
        .context("Invalid session.wallet_header")?;
    let session = Arc::new(session);

    let state = if args.memory {
        tracing::warn!("Using in-memory store - data is lost on shutdown");
        AppState::in_memory(Arc::new(MemoryStore::new()), session)
    } else {
        let database_url = args.database_url.or(config.database.url).context(
            "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, \
             ~/.hackreg/config.toml, or use --memory",
        )?;

        // Connects on first request; migrations run with the first connection
        let db = ConnectionProvider::new(database_url, config.database.max_connections);
        AppState::postgres(Arc::new(db), session)
    };

    tracing::info!(
        bind = %server_config.bind_addr,
        wallet_header = %config.session.wallet_header,
        "Starting hackreg server"
    );

    // Run server (blocks until shutdown)
    run_server(state, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
