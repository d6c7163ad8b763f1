//! In-memory user store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use rollcall_core::storage::{Result, UserStore};
use rollcall_core::user::{DiscordId, User};

/// In-memory user store for testing.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access;
/// clones share the same map. Data is not persisted and will be lost when
/// the last clone is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a record, replacing any existing one with the same id.
    ///
    /// This stands in for the external verification flow that writes
    /// records in production; the `UserStore` impl itself stays read-only.
    pub async fn insert(&self, user: User) {
        let mut users = self.users.write().await;
        users.insert(user.discord_id.as_str().to_string(), user);
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get_user(&self, discord_id: &DiscordId) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(discord_id.as_str()).cloned())
    }

    async fn user_exists(&self, discord_id: &DiscordId) -> Result<bool> {
        let users = self.users.read().await;
        Ok(users.contains_key(discord_id.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_core::user::UserClaims;

    fn sample_user(id: u64) -> User {
        User::new(DiscordId::from(id), 1_700_000_000 + id as i64)
            .with_encrypted_eid(id.to_be_bytes().to_vec())
            .with_claims(UserClaims {
                major: [format!("major-{id}")].into(),
                ..UserClaims::default()
            })
    }

    #[tokio::test]
    async fn test_get_user_returns_seeded_record() {
        let store = InMemoryUserStore::new();
        store.insert(sample_user(123)).await;

        let user = store
            .get_user(&DiscordId::from(123u64))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.discord_id.as_str(), "123");
        assert_eq!(user.claims.major.len(), 1);
    }

    #[tokio::test]
    async fn test_get_user_absent_is_none() {
        let store = InMemoryUserStore::new();
        let result = store.get_user(&DiscordId::from(999u64)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_user_exists_agrees_with_get_user() {
        let store = InMemoryUserStore::new();
        store.insert(sample_user(42)).await;

        assert!(store.user_exists(&DiscordId::from(42u64)).await.unwrap());
        assert!(!store.user_exists(&DiscordId::from(43u64)).await.unwrap());
    }

    #[tokio::test]
    async fn test_concurrent_lookups_do_not_cross_contaminate() {
        let store = InMemoryUserStore::new();
        store.insert(sample_user(1)).await;
        store.insert(sample_user(2)).await;

        let id_a = DiscordId::from(1u64);
        let id_b = DiscordId::from(2u64);
        let (a, b) = tokio::join!(store.get_user(&id_a), store.get_user(&id_b));

        assert_eq!(a.unwrap().unwrap().discord_id.as_str(), "1");
        assert_eq!(b.unwrap().unwrap().discord_id.as_str(), "2");
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = InMemoryUserStore::new();
        let clone = store.clone();
        store.insert(sample_user(7)).await;

        assert!(clone.user_exists(&DiscordId::from(7u64)).await.unwrap());
    }
}
