use thiserror::Error;

/// Errors that can occur when validating a Discord id.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiscordIdError {
    #[error("Discord id must not be empty")]
    Empty,
    #[error("Discord id must be a decimal snowflake, got {0:?}")]
    NotNumeric(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discord_id_error_display() {
        assert_eq!(
            DiscordIdError::Empty.to_string(),
            "Discord id must not be empty"
        );
        assert_eq!(
            DiscordIdError::NotNumeric("abc".to_string()).to_string(),
            "Discord id must be a decimal snowflake, got \"abc\""
        );
    }
}
