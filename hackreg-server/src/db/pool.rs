//! Database connection management
//!
//! `ConnectionProvider` is the one place a `PgPool` is created. It is handed
//! to the stores explicitly and connects on first use, at most once per
//! process; concurrent first callers wait on the same initialization.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

use super::migrations;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the connection fails.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with custom options.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Lazily connected, memoized database handle.
pub struct ConnectionProvider {
    database_url: String,
    max_connections: u32,
    pool: OnceCell<PgPool>,
}

impl ConnectionProvider {
    pub fn new(database_url: impl Into<String>, max_connections: u32) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections,
            pool: OnceCell::new(),
        }
    }

    /// Get the pool, connecting and ensuring the schema on first call.
    ///
    /// A failed attempt leaves the cell empty, so the next request retries
    /// the connection instead of caching the failure.
    pub async fn pool(&self) -> Result<&PgPool, sqlx::Error> {
        self.pool
            .get_or_try_init(|| async {
                tracing::info!(
                    max_connections = self.max_connections,
                    "connecting to database"
                );
                let pool =
                    create_pool_with_options(&self.database_url, self.max_connections).await?;
                migrations::run(&pool).await?;
                Ok(pool)
            })
            .await
    }

    /// Whether the pool has been established.
    pub fn is_connected(&self) -> bool {
        self.pool.initialized()
    }
}
