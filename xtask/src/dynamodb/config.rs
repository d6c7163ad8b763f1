//! Table configuration types (Functional Core - pure data).

use rollcall::storage::dynamodb::ATTR_DISCORD_ID;

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// DynamoDB attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }
}

/// Returns the canonical configuration for the users table: a single
/// partition key on `discord_id`, no sort key, no secondary indexes.
/// This is a pure function - no I/O.
pub fn users_table_config() -> TableConfig {
    TableConfig {
        table_name: "users".to_string(),
        partition_key: KeyAttribute {
            name: ATTR_DISCORD_ID.to_string(),
            attribute_type: AttributeType::String,
        },
    }
}
