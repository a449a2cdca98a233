//! Schema for the two document collections
//!
//! Each collection is a table of JSONB documents. The identifying field is
//! lifted into a key column so the database enforces uniqueness.

use sqlx::PgPool;

/// Create the collections if they do not exist yet. Safe to run repeatedly.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring document collections...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS hackathons (
            id UUID PRIMARY KEY,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            doc JSONB NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_hackathons_created_at ON hackathons (created_at)")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            wallet_address TEXT PRIMARY KEY,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            doc JSONB NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Document collections ready");
    Ok(())
}
