use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::validation::parse_holiday_date;

/// A hotel stay within a holiday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hotel {
    pub name: String,
    /// Check-in date (YYYY-MM-DD), empty when unknown.
    pub check_in: String,
    /// Check-out date (YYYY-MM-DD), empty when unknown.
    pub check_out: String,
    pub address: String,
}

impl Hotel {
    /// Creates a hotel with only a name set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the stay dates.
    pub fn with_stay(mut self, check_in: impl Into<String>, check_out: impl Into<String>) -> Self {
        self.check_in = check_in.into();
        self.check_out = check_out.into();
        self
    }

    /// Sets the address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }
}

/// A planned activity within a holiday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    pub description: String,
    /// Activity date (YYYY-MM-DD), empty when unknown.
    pub date: String,
}

impl Activity {
    pub fn new(description: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            date: date.into(),
        }
    }
}

/// Every user-editable field of a holiday.
///
/// All fields are optional. When used as an update payload, only the fields
/// that are `Some` overwrite the stored record (see [`HolidayDetails::merge`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HolidayDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbound_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbound_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbound_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbound_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbound_flight_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbound_terminal: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_flight_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_terminal: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotels: Option<Vec<Hotel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<Activity>>,

    /// Free text, may contain newlines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_notes: Option<String>,
}

impl HolidayDetails {
    /// Creates details with only a destination set.
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: Some(destination.into()),
            ..Self::default()
        }
    }

    /// Sets the outbound leg.
    pub fn with_outbound(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        self.outbound_from = Some(from.into());
        self.outbound_to = Some(to.into());
        self.outbound_date = Some(date.into());
        self
    }

    /// Sets the return leg.
    pub fn with_return(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        self.return_from = Some(from.into());
        self.return_to = Some(to.into());
        self.return_date = Some(date.into());
        self
    }

    pub fn with_hotels(mut self, hotels: Vec<Hotel>) -> Self {
        self.hotels = Some(hotels);
        self
    }

    pub fn with_activities(mut self, activities: Vec<Activity>) -> Self {
        self.activities = Some(activities);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.other_notes = Some(notes.into());
        self
    }

    /// Overwrites every field that is present in `changes`.
    ///
    /// Fields absent from `changes` keep their current value.
    pub fn merge(&mut self, changes: HolidayDetails) {
        fn overwrite<T>(slot: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *slot = value;
            }
        }

        overwrite(&mut self.destination, changes.destination);
        overwrite(&mut self.outbound_from, changes.outbound_from);
        overwrite(&mut self.outbound_to, changes.outbound_to);
        overwrite(&mut self.outbound_date, changes.outbound_date);
        overwrite(&mut self.outbound_time, changes.outbound_time);
        overwrite(&mut self.outbound_flight_number, changes.outbound_flight_number);
        overwrite(&mut self.outbound_terminal, changes.outbound_terminal);
        overwrite(&mut self.return_from, changes.return_from);
        overwrite(&mut self.return_to, changes.return_to);
        overwrite(&mut self.return_date, changes.return_date);
        overwrite(&mut self.return_time, changes.return_time);
        overwrite(&mut self.return_flight_number, changes.return_flight_number);
        overwrite(&mut self.return_terminal, changes.return_terminal);
        overwrite(&mut self.hotels, changes.hotels);
        overwrite(&mut self.activities, changes.activities);
        overwrite(&mut self.other_notes, changes.other_notes);
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A persisted holiday: identity, details and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayRecord {
    pub id: String,
    #[serde(flatten)]
    pub details: HolidayDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl HolidayRecord {
    /// Creates a freshly created record (no `updated_at` yet).
    pub fn new(id: impl Into<String>, details: HolidayDetails, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            details,
            created_at: Some(created_at),
            updated_at: None,
        }
    }

    /// Applies an update: merges the supplied fields and stamps `updated_at`.
    ///
    /// `id` and `created_at` are never modified.
    pub fn apply_update(&mut self, changes: HolidayDetails, updated_at: DateTime<Utc>) {
        self.details.merge(changes);
        self.updated_at = Some(updated_at);
    }

    /// Returns the destination, or a placeholder when unset.
    pub fn display_name(&self) -> &str {
        self.details
            .destination
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or("Unknown")
    }

    /// Parsed outbound date, if set and well-formed.
    pub fn outbound_date(&self) -> Option<NaiveDate> {
        self.details
            .outbound_date
            .as_deref()
            .and_then(parse_holiday_date)
    }

    /// Parsed return date, if set and well-formed.
    pub fn return_date(&self) -> Option<NaiveDate> {
        self.details
            .return_date
            .as_deref()
            .and_then(parse_holiday_date)
    }

    /// Hotels, or an empty slice when none were recorded.
    pub fn hotels(&self) -> &[Hotel] {
        self.details.hotels.as_deref().unwrap_or_default()
    }

    /// Activities, or an empty slice when none were recorded.
    pub fn activities(&self) -> &[Activity] {
        self.details.activities.as_deref().unwrap_or_default()
    }
}
