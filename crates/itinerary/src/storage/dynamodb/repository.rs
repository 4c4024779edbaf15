//! DynamoDB repository implementation.
//!
//! Implements `HolidayRepository` from `itinerary_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use itinerary_core::holiday::{
    is_valid_holiday_id, sort_by_outbound_date, HolidayDetails, HolidayRecord,
};
use itinerary_core::storage::{HolidayRepository, RepositoryError, Result};

use super::conversions::{
    holiday_to_item, item_to_holiday, update_expression, ENTITY_TYPE_HOLIDAY,
};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error,
    map_update_item_error,
};
use super::keys;

/// DynamoDB-based repository implementation.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

fn check_id(id: &str) -> Result<()> {
    if is_valid_holiday_id(id) {
        Ok(())
    } else {
        Err(RepositoryError::InvalidIdentifier(id.to_string()))
    }
}

#[async_trait]
impl HolidayRepository for DynamoDbRepository {
    async fn list_holidays(&self) -> Result<Vec<HolidayRecord>> {
        let mut holidays = Vec::new();
        let mut start_key = None;

        loop {
            let result = self
                .client
                .scan()
                .table_name(&self.table_name)
                .filter_expression("entityType = :type")
                .expression_attribute_values(
                    ":type",
                    AttributeValue::S(ENTITY_TYPE_HOLIDAY.to_string()),
                )
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_scan_error)?;

            for item in result.items.unwrap_or_default() {
                holidays.push(item_to_holiday(&item)?);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        sort_by_outbound_date(&mut holidays);
        Ok(holidays)
    }

    async fn get_holiday(&self, id: &str) -> Result<Option<HolidayRecord>> {
        check_id(id)?;

        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::holiday_pk(id)))
            .key("SK", AttributeValue::S(keys::holiday_sk(id)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_holiday(&item)?)),
            None => Ok(None),
        }
    }

    async fn create_holiday(
        &self,
        details: &HolidayDetails,
        created_at: DateTime<Utc>,
    ) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let item = holiday_to_item(&id, details, created_at);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(PK)")
            .send()
            .await
            .map_err(|e| map_put_item_error(e, &id))?;

        tracing::debug!(holiday_id = %id, table = %self.table_name, "Holiday put");
        Ok(id)
    }

    async fn update_holiday(
        &self,
        id: &str,
        changes: &HolidayDetails,
        updated_at: DateTime<Utc>,
    ) -> Result<()> {
        check_id(id)?;
        let update = update_expression(changes, updated_at);

        self.client
            .update_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::holiday_pk(id)))
            .key("SK", AttributeValue::S(keys::holiday_sk(id)))
            .update_expression(update.expression)
            .set_expression_attribute_names(Some(update.names))
            .set_expression_attribute_values(Some(update.values))
            .condition_expression("attribute_exists(PK)")
            .send()
            .await
            .map_err(|e| map_update_item_error(e, id))?;

        Ok(())
    }

    async fn delete_holiday(&self, id: &str) -> Result<()> {
        check_id(id)?;

        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::holiday_pk(id)))
            .key("SK", AttributeValue::S(keys::holiday_sk(id)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
