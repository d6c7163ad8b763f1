use async_trait::async_trait;

use crate::user::{DiscordId, User};

use super::Result;

/// Read access to registered user records.
///
/// Records are written by the verification flow, which lives outside this
/// library; implementations only ever look records up.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Looks up a user by their Discord id.
    ///
    /// Returns `Ok(None)` when no record exists for the id.
    async fn get_user(&self, discord_id: &DiscordId) -> Result<Option<User>>;

    /// Returns true if a record exists for the given Discord id.
    ///
    /// Must agree with `get_user` on the same store state; backends may
    /// answer it without fetching the full record.
    async fn user_exists(&self, discord_id: &DiscordId) -> Result<bool>;
}
