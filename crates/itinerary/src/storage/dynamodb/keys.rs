//! DynamoDB key generation functions.

pub const HOLIDAY_PREFIX: &str = "HOLIDAY#";

/// Generate primary key for a Holiday.
///
/// Pattern: `HOLIDAY#<holiday_id>`
pub fn holiday_pk(holiday_id: &str) -> String {
    format!("{HOLIDAY_PREFIX}{holiday_id}")
}

/// Generate sort key for a Holiday.
///
/// Pattern: `HOLIDAY#<holiday_id>` (same as PK for single-item access)
pub fn holiday_sk(holiday_id: &str) -> String {
    format!("{HOLIDAY_PREFIX}{holiday_id}")
}
