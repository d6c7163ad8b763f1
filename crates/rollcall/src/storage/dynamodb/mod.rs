//! DynamoDB storage backend.
//!
//! Implements `rollcall_core::storage::UserStore` against the `users`
//! table, keyed by the `discord_id` attribute.

mod client;
mod conversions;
mod error;
mod store;

pub use client::{create_client, AwsConfig};
pub use conversions::{
    item_to_user, user_to_item, ATTR_CLAIMS, ATTR_DISCORD_ID, ATTR_ENCRYPTED_EID,
    ATTR_TOKEN_REQUESTED_AT,
};
pub use store::DynamoDbUserStore;
