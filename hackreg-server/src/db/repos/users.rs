//! User profile repository
//!
//! - find_or_create: INSERT with ON CONFLICT (idempotent, no check-then-insert)
//! - update: single-statement JSONB merge, so untouched fields keep their values

use std::sync::Arc;

use async_trait::async_trait;

use hackreg_core::models::{UserPatch, UserProfile, WalletAddress};

use super::{StoreError, UserStore};
use crate::db::ConnectionProvider;

/// PostgreSQL-backed user collection
pub struct PgUserStore {
    db: Arc<ConnectionProvider>,
}

impl PgUserStore {
    pub fn new(db: Arc<ConnectionProvider>) -> Self {
        Self { db }
    }
}

fn decode(doc: serde_json::Value) -> Result<UserProfile, StoreError> {
    Ok(serde_json::from_value(doc)?)
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find(&self, wallet: &WalletAddress) -> Result<Option<UserProfile>, StoreError> {
        let pool = self.db.pool().await?;
        let doc: Option<serde_json::Value> =
            sqlx::query_scalar("SELECT doc FROM users WHERE wallet_address = $1")
                .bind(wallet.as_str())
                .fetch_optional(pool)
                .await?;

        doc.map(decode).transpose()
    }

    async fn find_or_create(&self, wallet: &WalletAddress) -> Result<UserProfile, StoreError> {
        let pool = self.db.pool().await?;
        let fresh = serde_json::to_value(UserProfile::new(wallet.clone()))?;

        // DO UPDATE (not DO NOTHING) so RETURNING yields the existing row
        let doc: serde_json::Value = sqlx::query_scalar(
            r#"
            INSERT INTO users (wallet_address, doc) VALUES ($1, $2)
            ON CONFLICT (wallet_address) DO UPDATE SET wallet_address = EXCLUDED.wallet_address
            RETURNING doc
            "#,
        )
        .bind(wallet.as_str())
        .bind(fresh)
        .fetch_one(pool)
        .await?;

        decode(doc)
    }

    async fn update(
        &self,
        wallet: &WalletAddress,
        patch: &UserPatch,
    ) -> Result<Option<UserProfile>, StoreError> {
        if patch.is_empty() {
            return self.find(wallet).await;
        }

        let pool = self.db.pool().await?;
        let changes = patch.to_document()?;

        let doc: Option<serde_json::Value> = sqlx::query_scalar(
            r#"
            UPDATE users
            SET doc = doc || $2, updated_at = NOW()
            WHERE wallet_address = $1
            RETURNING doc
            "#,
        )
        .bind(wallet.as_str())
        .bind(changes)
        .fetch_optional(pool)
        .await?;

        doc.map(decode).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hackreg_core::models::ExperienceLevel;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p hackreg-server -- --ignored

    fn store() -> PgUserStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        PgUserStore::new(Arc::new(ConnectionProvider::new(url, 2)))
    }

    fn unique_wallet() -> WalletAddress {
        WalletAddress::new(&format!("0x{}", uuid::Uuid::new_v4().simple())).unwrap()
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn find_or_create_is_idempotent() {
        let store = store();
        let wallet = unique_wallet();

        let first = store.find_or_create(&wallet).await.unwrap();
        let second = store.find_or_create(&wallet).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first, UserProfile::new(wallet));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_merges_named_fields() {
        let store = store();
        let wallet = unique_wallet();
        store.find_or_create(&wallet).await.unwrap();

        let patch = UserPatch {
            name: Some(Some("Ada".into())),
            experience_level: Some(Some(ExperienceLevel::Expert)),
            ..Default::default()
        };
        store.update(&wallet, &patch).await.unwrap();

        let patch = UserPatch {
            bio: Some(Some("compilers".into())),
            ..Default::default()
        };
        let updated = store.update(&wallet, &patch).await.unwrap().expect("exists");

        assert_eq!(updated.name.as_deref(), Some("Ada"));
        assert_eq!(updated.bio.as_deref(), Some("compilers"));
        assert_eq!(updated.experience_level, Some(ExperienceLevel::Expert));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_missing_user_writes_nothing() {
        let store = store();
        let wallet = unique_wallet();

        let patch = UserPatch {
            looking_for_team: Some(true),
            ..Default::default()
        };
        assert!(store.update(&wallet, &patch).await.unwrap().is_none());
        assert!(store.find(&wallet).await.unwrap().is_none());
    }
}
