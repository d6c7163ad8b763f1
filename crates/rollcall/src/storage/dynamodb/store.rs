//! DynamoDB user store implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use rollcall_core::storage::{Result, UserStore};
use rollcall_core::user::{DiscordId, User};

use super::client::{create_client, AwsConfig};
use super::conversions::{item_to_user, ATTR_DISCORD_ID};
use super::error::map_get_item_error;

/// DynamoDB-backed user store.
///
/// Holds an immutable region-scoped client and the table name. Concurrent
/// lookups share the client handle; each call issues exactly one network
/// round trip, with no caching and no retries beyond what the SDK does by
/// default.
pub struct DynamoDbUserStore {
    client: Client,
    table_name: String,
}

impl DynamoDbUserStore {
    /// Creates a store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a store from environment configuration.
    ///
    /// Uses the AWS SDK default credential chain, the region from
    /// `AWS_REGION`, and the table name from `USERS_TABLE_NAME` (defaults
    /// to "users"). The configuration is captured here once; later
    /// environment changes do not affect the store.
    pub async fn from_env() -> Self {
        let client = create_client(&AwsConfig::default()).await;
        let table_name = std::env::var("USERS_TABLE_NAME").unwrap_or_else(|_| "users".to_string());

        Self::new(client, table_name)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl UserStore for DynamoDbUserStore {
    async fn get_user(&self, discord_id: &DiscordId) -> Result<Option<User>> {
        tracing::debug!(%discord_id, table = %self.table_name, "user lookup");

        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(
                ATTR_DISCORD_ID,
                AttributeValue::S(discord_id.as_str().to_string()),
            )
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_user(&item)?)),
            None => Ok(None),
        }
    }

    async fn user_exists(&self, discord_id: &DiscordId) -> Result<bool> {
        // Project only the key attribute; the record body is not needed.
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(
                ATTR_DISCORD_ID,
                AttributeValue::S(discord_id.as_str().to_string()),
            )
            .projection_expression(ATTR_DISCORD_ID)
            .send()
            .await
            .map_err(map_get_item_error)?;

        Ok(result.item.is_some())
    }
}
