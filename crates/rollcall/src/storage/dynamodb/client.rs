//! AWS SDK client setup.

use aws_sdk_dynamodb::Client;

/// AWS client configuration.
///
/// Plain immutable data, captured once. Changing the environment after a
/// client has been built from this config has no effect on that client.
#[derive(Debug, Clone)]
pub struct AwsConfig {
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
    /// AWS region.
    pub region: String,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            endpoint_url: std::env::var("AWS_ENDPOINT_URL").ok(),
            region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        }
    }
}

impl AwsConfig {
    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}

/// Creates a DynamoDB client with the given configuration.
///
/// Uses the AWS SDK default credential chain. The returned client holds
/// no mutable per-request state and is cheap to clone, so a single handle
/// can be shared by any number of concurrent lookups.
pub async fn create_client(config: &AwsConfig) -> Client {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    let sdk_config = loader.load().await;
    tracing::info!(region = %config.region, "DynamoDB client configured");
    Client::new(&sdk_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_display_local() {
        let config = AwsConfig {
            endpoint_url: Some("http://localhost:8000".to_string()),
            region: "us-east-1".to_string(),
        };
        assert_eq!(
            config.target_display(),
            "Local DynamoDB (http://localhost:8000)"
        );
    }

    #[test]
    fn test_target_display_aws() {
        let config = AwsConfig {
            endpoint_url: None,
            region: "eu-west-1".to_string(),
        };
        assert_eq!(config.target_display(), "AWS DynamoDB (region: eu-west-1)");
    }
}
