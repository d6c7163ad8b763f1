//! User record storage backends for the rollcall verification bot.
//!
//! The domain model and the `UserStore` trait live in `rollcall_core`;
//! this crate provides the concrete backends, selected via feature flags.

pub mod storage;

pub use rollcall_core::storage::{Result, StoreError, UserStore};
pub use rollcall_core::user::{DiscordId, DiscordIdError, User, UserClaims};
