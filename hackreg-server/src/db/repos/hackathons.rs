//! Hackathon repository
//!
//! - insert: id and creation time assigned here, full document stored
//! - list: ordered by creation time, ties broken by id

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use hackreg_core::models::{Hackathon, NewHackathon};

use super::{HackathonStore, StoreError};
use crate::db::ConnectionProvider;

/// PostgreSQL-backed hackathon collection
pub struct PgHackathonStore {
    db: Arc<ConnectionProvider>,
}

impl PgHackathonStore {
    pub fn new(db: Arc<ConnectionProvider>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HackathonStore for PgHackathonStore {
    async fn insert(&self, hackathon: NewHackathon) -> Result<Hackathon, StoreError> {
        let pool = self.db.pool().await?;
        let record = hackathon.into_record(Uuid::new_v4(), Utc::now());
        let doc = serde_json::to_value(&record)?;

        sqlx::query("INSERT INTO hackathons (id, created_at, doc) VALUES ($1, $2, $3)")
            .bind(record.id)
            .bind(record.created_at)
            .bind(doc)
            .execute(pool)
            .await?;

        tracing::debug!(id = %record.id, "hackathon stored");
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<Hackathon>, StoreError> {
        let pool = self.db.pool().await?;
        let docs: Vec<serde_json::Value> =
            sqlx::query_scalar("SELECT doc FROM hackathons ORDER BY created_at, id")
                .fetch_all(pool)
                .await?;

        docs.into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(StoreError::from))
            .collect()
    }

    async fn get(&self, id: Uuid) -> Result<Option<Hackathon>, StoreError> {
        let pool = self.db.pool().await?;
        let doc: Option<serde_json::Value> =
            sqlx::query_scalar("SELECT doc FROM hackathons WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(doc.map(serde_json::from_value).transpose()?)
    }
}
