//! Document stores behind trait seams
//!
//! Handlers only see `HackathonStore` and `UserStore`. The PostgreSQL
//! implementations keep one JSONB document per row; `MemoryStore` keeps
//! the same documents in process for tests and local runs.

pub mod hackathons;
pub mod memory;
pub mod users;

use async_trait::async_trait;
use uuid::Uuid;

use hackreg_core::models::{Hackathon, NewHackathon, UserPatch, UserProfile, WalletAddress};

pub use hackathons::PgHackathonStore;
pub use memory::MemoryStore;
pub use users::PgUserStore;

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("malformed stored document: {0}")]
    Document(#[from] serde_json::Error),
}

/// Hackathon collection: insert and read, no update or delete
#[async_trait]
pub trait HackathonStore: Send + Sync {
    /// Persist a validated listing under a fresh id.
    async fn insert(&self, hackathon: NewHackathon) -> Result<Hackathon, StoreError>;

    /// Every listing in insertion order.
    async fn list(&self) -> Result<Vec<Hackathon>, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Option<Hackathon>, StoreError>;
}

/// User collection keyed by wallet address
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find(&self, wallet: &WalletAddress) -> Result<Option<UserProfile>, StoreError>;

    /// Return the profile for `wallet`, creating an empty one if needed.
    async fn find_or_create(&self, wallet: &WalletAddress) -> Result<UserProfile, StoreError>;

    /// Merge `patch` into an existing profile.
    ///
    /// Returns `None`, without writing anything, when no profile exists.
    async fn update(
        &self,
        wallet: &WalletAddress,
        patch: &UserPatch,
    ) -> Result<Option<UserProfile>, StoreError>;
}
