//! Connector for the DynamoDB remote backend.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use itinerary_core::storage::{RemoteConnector, Result};

use super::error::map_describe_table_error;
use super::DynamoDbRepository;
use crate::config::{is_configured_table_name, Config};

/// Connects to the DynamoDB table named in configuration.
///
/// Credentials and region come from the AWS SDK default chain.
#[derive(Debug, Clone)]
pub struct DynamoDbConnector {
    table_name: String,
}

impl DynamoDbConnector {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.dynamodb_table_name.clone())
    }
}

#[async_trait]
impl RemoteConnector for DynamoDbConnector {
    type Backend = DynamoDbRepository;

    fn is_configured(&self) -> bool {
        is_configured_table_name(&self.table_name)
    }

    async fn connect(&self) -> Result<DynamoDbRepository> {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&config);

        client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| map_describe_table_error(e, &self.table_name))?;

        tracing::debug!(table = %self.table_name, "DynamoDB table reachable");
        Ok(DynamoDbRepository::new(client, self.table_name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_table_is_unconfigured() {
        assert!(!DynamoDbConnector::new("YOUR_TABLE_NAME").is_configured());
        assert!(!DynamoDbConnector::new("").is_configured());
        assert!(DynamoDbConnector::new("holidays").is_configured());
    }
}
