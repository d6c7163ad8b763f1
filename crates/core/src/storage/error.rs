use thiserror::Error;

/// Errors that can occur during user store operations.
///
/// A missing record is not an error; lookups return `Ok(None)` for that
/// case and reserve this type for actual failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid record data: {0}")]
    InvalidRecord(String),
}

/// Result type for user store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_connection_failed_display() {
        let error = StoreError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_store_error_query_failed_display() {
        let error = StoreError::QueryFailed("invalid partition key".to_string());
        assert_eq!(error.to_string(), "Query failed: invalid partition key");
    }

    #[test]
    fn test_store_error_invalid_record_display() {
        let error = StoreError::InvalidRecord("missing field: discord_id".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid record data: missing field: discord_id"
        );
    }
}
