use chrono::NaiveDate;

use super::error::ValidationError;
use super::types::HolidayDetails;

/// Date format used by every date field of a holiday.
pub const HOLIDAY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a holiday date string (YYYY-MM-DD). Empty or malformed input
/// yields `None`.
pub fn parse_holiday_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, HOLIDAY_DATE_FORMAT).ok()
}

fn check_date(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() && parse_holiday_date(v).is_none() => {
            Err(ValidationError::InvalidDate {
                field,
                value: v.to_string(),
            })
        }
        _ => Ok(()),
    }
}

/// Validates holiday details before they are persisted.
///
/// Only date shape is checked: every non-empty date field must be a
/// calendar date. Blank hotel and activity entries are accepted.
pub fn validate_details(details: &HolidayDetails) -> Result<(), ValidationError> {
    check_date("outboundDate", details.outbound_date.as_deref())?;
    check_date("returnDate", details.return_date.as_deref())?;

    for hotel in details.hotels.iter().flatten() {
        check_date("hotel checkIn", Some(hotel.check_in.as_str()))?;
        check_date("hotel checkOut", Some(hotel.check_out.as_str()))?;
    }

    for activity in details.activities.iter().flatten() {
        check_date("activity date", Some(activity.date.as_str()))?;
    }

    Ok(())
}
