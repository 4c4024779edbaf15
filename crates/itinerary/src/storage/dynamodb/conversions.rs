//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and domain types.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};
use itinerary_core::holiday::{Activity, HolidayDetails, HolidayRecord, Hotel};
use itinerary_core::storage::RepositoryError;

use super::keys;

pub const ENTITY_TYPE_HOLIDAY: &str = "HOLIDAY";

type Item = HashMap<String, AttributeValue>;

// ============================================================================
// Holiday conversions
// ============================================================================

/// Top-level string attributes paired with their values.
fn string_fields(details: &HolidayDetails) -> [(&'static str, Option<&String>); 14] {
    [
        ("destination", details.destination.as_ref()),
        ("outboundFrom", details.outbound_from.as_ref()),
        ("outboundTo", details.outbound_to.as_ref()),
        ("outboundDate", details.outbound_date.as_ref()),
        ("outboundTime", details.outbound_time.as_ref()),
        ("outboundFlightNumber", details.outbound_flight_number.as_ref()),
        ("outboundTerminal", details.outbound_terminal.as_ref()),
        ("returnFrom", details.return_from.as_ref()),
        ("returnTo", details.return_to.as_ref()),
        ("returnDate", details.return_date.as_ref()),
        ("returnTime", details.return_time.as_ref()),
        ("returnFlightNumber", details.return_flight_number.as_ref()),
        ("returnTerminal", details.return_terminal.as_ref()),
        ("otherNotes", details.other_notes.as_ref()),
    ]
}

/// Attributes for every field present in `details`.
fn detail_attributes(details: &HolidayDetails) -> Vec<(&'static str, AttributeValue)> {
    let mut attributes: Vec<(&'static str, AttributeValue)> = string_fields(details)
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, AttributeValue::S(v.clone()))))
        .collect();

    if let Some(hotels) = &details.hotels {
        attributes.push((
            "hotels",
            AttributeValue::L(hotels.iter().map(hotel_to_attr).collect()),
        ));
    }
    if let Some(activities) = &details.activities {
        attributes.push((
            "activities",
            AttributeValue::L(activities.iter().map(activity_to_attr).collect()),
        ));
    }

    attributes
}

/// Convert a new Holiday to a DynamoDB item.
pub fn holiday_to_item(id: &str, details: &HolidayDetails, created_at: DateTime<Utc>) -> Item {
    let mut item = HashMap::new();

    // Keys
    item.insert("PK".to_string(), AttributeValue::S(keys::holiday_pk(id)));
    item.insert("SK".to_string(), AttributeValue::S(keys::holiday_sk(id)));

    // Entity type
    item.insert(
        "entityType".to_string(),
        AttributeValue::S(ENTITY_TYPE_HOLIDAY.to_string()),
    );

    // Data
    for (name, value) in detail_attributes(details) {
        item.insert(name.to_string(), value);
    }
    item.insert("id".to_string(), AttributeValue::S(id.to_string()));
    item.insert(
        "createdAt".to_string(),
        AttributeValue::S(created_at.to_rfc3339()),
    );

    item
}

/// Convert a DynamoDB item to a Holiday.
pub fn item_to_holiday(item: &Item) -> Result<HolidayRecord, RepositoryError> {
    let details = HolidayDetails {
        destination: get_optional_string(item, "destination"),
        outbound_from: get_optional_string(item, "outboundFrom"),
        outbound_to: get_optional_string(item, "outboundTo"),
        outbound_date: get_optional_string(item, "outboundDate"),
        outbound_time: get_optional_string(item, "outboundTime"),
        outbound_flight_number: get_optional_string(item, "outboundFlightNumber"),
        outbound_terminal: get_optional_string(item, "outboundTerminal"),
        return_from: get_optional_string(item, "returnFrom"),
        return_to: get_optional_string(item, "returnTo"),
        return_date: get_optional_string(item, "returnDate"),
        return_time: get_optional_string(item, "returnTime"),
        return_flight_number: get_optional_string(item, "returnFlightNumber"),
        return_terminal: get_optional_string(item, "returnTerminal"),
        hotels: get_optional_list(item, "hotels", attr_to_hotel)?,
        activities: get_optional_list(item, "activities", attr_to_activity)?,
        other_notes: get_optional_string(item, "otherNotes"),
    };

    Ok(HolidayRecord {
        id: get_string(item, "id")?,
        details,
        created_at: get_optional_datetime(item, "createdAt")?,
        updated_at: get_optional_datetime(item, "updatedAt")?,
    })
}

/// UpdateItem arguments that set the supplied fields and `updatedAt`.
#[derive(Debug, Default, PartialEq)]
pub struct UpdateExpression {
    pub expression: String,
    pub names: HashMap<String, String>,
    pub values: Item,
}

/// Build a `SET` expression over every field present in `changes`.
pub fn update_expression(changes: &HolidayDetails, updated_at: DateTime<Utc>) -> UpdateExpression {
    let mut update = UpdateExpression::default();
    let mut clauses = Vec::new();

    let attributes = detail_attributes(changes).into_iter().chain(std::iter::once((
        "updatedAt",
        AttributeValue::S(updated_at.to_rfc3339()),
    )));

    for (index, (name, value)) in attributes.enumerate() {
        let name_placeholder = format!("#f{index}");
        let value_placeholder = format!(":v{index}");
        clauses.push(format!("{name_placeholder} = {value_placeholder}"));
        update.names.insert(name_placeholder, name.to_string());
        update.values.insert(value_placeholder, value);
    }

    update.expression = format!("SET {}", clauses.join(", "));
    update
}

// ============================================================================
// Nested conversions
// ============================================================================

fn hotel_to_attr(hotel: &Hotel) -> AttributeValue {
    AttributeValue::M(HashMap::from([
        ("name".to_string(), AttributeValue::S(hotel.name.clone())),
        ("checkIn".to_string(), AttributeValue::S(hotel.check_in.clone())),
        ("checkOut".to_string(), AttributeValue::S(hotel.check_out.clone())),
        ("address".to_string(), AttributeValue::S(hotel.address.clone())),
    ]))
}

fn attr_to_hotel(value: &AttributeValue) -> Result<Hotel, RepositoryError> {
    let map = value
        .as_m()
        .map_err(|_| RepositoryError::InvalidData("Hotel is not a map".to_string()))?;

    Ok(Hotel {
        name: get_optional_string(map, "name").unwrap_or_default(),
        check_in: get_optional_string(map, "checkIn").unwrap_or_default(),
        check_out: get_optional_string(map, "checkOut").unwrap_or_default(),
        address: get_optional_string(map, "address").unwrap_or_default(),
    })
}

fn activity_to_attr(activity: &Activity) -> AttributeValue {
    AttributeValue::M(HashMap::from([
        (
            "description".to_string(),
            AttributeValue::S(activity.description.clone()),
        ),
        ("date".to_string(), AttributeValue::S(activity.date.clone())),
    ]))
}

fn attr_to_activity(value: &AttributeValue) -> Result<Activity, RepositoryError> {
    let map = value
        .as_m()
        .map_err(|_| RepositoryError::InvalidData("Activity is not a map".to_string()))?;

    Ok(Activity {
        description: get_optional_string(map, "description").unwrap_or_default(),
        date: get_optional_string(map, "date").unwrap_or_default(),
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(item: &Item, key: &str) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(item: &Item, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

/// Get an optional list attribute, converting each element.
fn get_optional_list<T>(
    item: &Item,
    key: &str,
    convert: fn(&AttributeValue) -> Result<T, RepositoryError>,
) -> Result<Option<Vec<T>>, RepositoryError> {
    let Some(value) = item.get(key) else {
        return Ok(None);
    };
    let list = value
        .as_l()
        .map_err(|_| RepositoryError::InvalidData(format!("Invalid list field: {}", key)))?;

    list.iter().map(convert).collect::<Result<Vec<_>, _>>().map(Some)
}

/// Get an optional datetime attribute (RFC 3339 format).
fn get_optional_datetime(
    item: &Item,
    key: &str,
) -> Result<Option<DateTime<Utc>>, RepositoryError> {
    get_optional_string(item, key)
        .map(|s| {
            DateTime::parse_from_rfc3339(&s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
        })
        .transpose()
}
