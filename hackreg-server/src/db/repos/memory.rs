//! In-process document store
//!
//! Same contracts as the PostgreSQL stores, no database required. Used by
//! `hackreg serve --memory` and by the router tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use hackreg_core::models::{Hackathon, NewHackathon, UserPatch, UserProfile, WalletAddress};

use super::{HackathonStore, StoreError, UserStore};

/// Both collections held in memory
#[derive(Default)]
pub struct MemoryStore {
    hackathons: RwLock<Vec<Hackathon>>,
    users: RwLock<HashMap<WalletAddress, UserProfile>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored user profiles.
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    /// Insert or replace a profile as-is (fixtures, imports).
    pub async fn put_user(&self, user: UserProfile) {
        self.users
            .write()
            .await
            .insert(user.wallet_address.clone(), user);
    }
}

#[async_trait]
impl HackathonStore for MemoryStore {
    async fn insert(&self, hackathon: NewHackathon) -> Result<Hackathon, StoreError> {
        let record = hackathon.into_record(Uuid::new_v4(), Utc::now());
        self.hackathons.write().await.push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<Hackathon>, StoreError> {
        Ok(self.hackathons.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Hackathon>, StoreError> {
        Ok(self
            .hackathons
            .read()
            .await
            .iter()
            .find(|h| h.id == id)
            .cloned())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find(&self, wallet: &WalletAddress) -> Result<Option<UserProfile>, StoreError> {
        Ok(self.users.read().await.get(wallet).cloned())
    }

    async fn find_or_create(&self, wallet: &WalletAddress) -> Result<UserProfile, StoreError> {
        let mut users = self.users.write().await;
        let user = users
            .entry(wallet.clone())
            .or_insert_with(|| UserProfile::new(wallet.clone()));
        Ok(user.clone())
    }

    async fn update(
        &self,
        wallet: &WalletAddress,
        patch: &UserPatch,
    ) -> Result<Option<UserProfile>, StoreError> {
        let mut users = self.users.write().await;
        Ok(users.get_mut(wallet).map(|user| {
            user.apply(patch);
            user.clone()
        }))
    }
}
