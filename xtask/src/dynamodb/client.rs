//! Table state inspection (Imperative Shell).
//!
//! Client construction itself lives in the library
//! (`rollcall::storage::dynamodb::create_client`); this module only adds
//! the DescribeTable polling the deploy flow needs.

use aws_sdk_dynamodb::Client;

use super::error::{DynamodbError, Result};
use super::planning::{TableState, TableStatus};

/// Fetches current table state, returns None if table doesn't exist.
pub async fn get_table_state(client: &Client, table_name: &str) -> Result<Option<TableState>> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(response) => {
            let table = response.table().ok_or_else(|| {
                DynamodbError::AwsSdk("Table missing in DescribeTable response".to_string())
            })?;

            let status = match table.table_status() {
                Some(aws_sdk_dynamodb::types::TableStatus::Creating) => TableStatus::Creating,
                Some(aws_sdk_dynamodb::types::TableStatus::Updating) => TableStatus::Updating,
                Some(aws_sdk_dynamodb::types::TableStatus::Deleting) => TableStatus::Deleting,
                _ => TableStatus::Active,
            };

            Ok(Some(TableState { status }))
        }
        Err(err) => {
            let err_str = err.to_string();
            // Check if it's a ResourceNotFoundException
            if err_str.contains("ResourceNotFoundException") || err_str.contains("not found") {
                Ok(None)
            } else {
                Err(DynamodbError::AwsSdk(err_str))
            }
        }
    }
}
