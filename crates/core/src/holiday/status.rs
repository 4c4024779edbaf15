use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::HolidayRecord;

/// Where a holiday sits relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayStatus {
    /// Departed and not yet returned. Also any holiday with no departure
    /// date that has not returned.
    Current,
    /// Departure is in the future.
    Upcoming,
    /// Already returned.
    Past,
}

impl HolidayStatus {
    /// Returns the dashboard priority. Lower values appear first.
    pub fn sort_priority(&self) -> u8 {
        match self {
            HolidayStatus::Current => 0,
            HolidayStatus::Upcoming => 1,
            HolidayStatus::Past => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HolidayStatus::Current => "current",
            HolidayStatus::Upcoming => "upcoming",
            HolidayStatus::Past => "past",
        }
    }
}

/// Whole days from `today` until `date`. Negative when `date` is past.
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

/// Length of a trip in days, when both dates are known.
pub fn trip_duration(outbound: Option<NaiveDate>, return_date: Option<NaiveDate>) -> Option<i64> {
    match (outbound, return_date) {
        (Some(start), Some(end)) => Some((end - start).num_days()),
        _ => None,
    }
}

/// Computes the status of a holiday on `today`.
///
/// Only a known future departure makes a holiday upcoming. Otherwise the
/// return date decides: past once it has gone by, current until then or when
/// there is none.
pub fn holiday_status(record: &HolidayRecord, today: NaiveDate) -> HolidayStatus {
    if let Some(outbound) = record.outbound_date() {
        if days_until(outbound, today) > 0 {
            return HolidayStatus::Upcoming;
        }
    }

    match record.return_date() {
        Some(ret) if days_until(ret, today) < 0 => HolidayStatus::Past,
        _ => HolidayStatus::Current,
    }
}

fn cmp_outbound_date(a: &HolidayRecord, b: &HolidayRecord) -> Ordering {
    match (a.outbound_date(), b.outbound_date()) {
        (Some(a_date), Some(b_date)) => a_date.cmp(&b_date),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Orders holidays by outbound date ascending. Undated or malformed dates
/// sort last, keeping their relative order.
pub fn sort_by_outbound_date(records: &mut [HolidayRecord]) {
    records.sort_by(cmp_outbound_date);
}

/// Orders holidays for the dashboard: current first, then upcoming, then
/// past. Within a group, by outbound date ascending with undated last.
pub fn sort_for_dashboard(records: &mut [HolidayRecord], today: NaiveDate) {
    records.sort_by(|a, b| {
        let priority_cmp = holiday_status(a, today)
            .sort_priority()
            .cmp(&holiday_status(b, today).sort_priority());
        if priority_cmp != Ordering::Equal {
            return priority_cmp;
        }

        cmp_outbound_date(a, b)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::HolidayDetails;
    use chrono::Utc;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn trip(id: &str, outbound: &str, ret: &str) -> HolidayRecord {
        let details = HolidayDetails::new(id)
            .with_outbound("A", "B", outbound)
            .with_return("B", "A", ret);
        HolidayRecord::new(id, details, Utc::now())
    }

    #[test]
    fn test_days_until() {
        let today = make_date(2025, 6, 1);
        assert_eq!(days_until(make_date(2025, 6, 11), today), 10);
        assert_eq!(days_until(today, today), 0);
        assert_eq!(days_until(make_date(2025, 5, 30), today), -2);
    }

    #[test]
    fn test_trip_duration() {
        assert_eq!(
            trip_duration(Some(make_date(2025, 6, 1)), Some(make_date(2025, 6, 8))),
            Some(7)
        );
        assert_eq!(trip_duration(Some(make_date(2025, 6, 1)), None), None);
    }

    #[test]
    fn test_status_transitions() {
        let record = trip("t", "2025-06-10", "2025-06-20");

        assert_eq!(
            holiday_status(&record, make_date(2025, 6, 1)),
            HolidayStatus::Upcoming
        );
        assert_eq!(
            holiday_status(&record, make_date(2025, 6, 10)),
            HolidayStatus::Current
        );
        assert_eq!(
            holiday_status(&record, make_date(2025, 6, 20)),
            HolidayStatus::Current
        );
        assert_eq!(
            holiday_status(&record, make_date(2025, 6, 21)),
            HolidayStatus::Past
        );
    }

    #[test]
    fn test_status_without_dates() {
        let undated = HolidayRecord::new("u", HolidayDetails::new("Somewhere"), Utc::now());
        assert_eq!(
            holiday_status(&undated, make_date(2025, 6, 1)),
            HolidayStatus::Current
        );

        let return_only = trip("r", "", "2025-05-10");
        assert_eq!(
            holiday_status(&return_only, make_date(2025, 5, 10)),
            HolidayStatus::Current
        );
        assert_eq!(
            holiday_status(&return_only, make_date(2025, 6, 1)),
            HolidayStatus::Past
        );

        let one_way = trip("o", "2025-05-01", "");
        assert_eq!(
            holiday_status(&one_way, make_date(2025, 6, 1)),
            HolidayStatus::Current
        );
    }

    #[test]
    fn test_sort_for_dashboard() {
        let today = make_date(2025, 6, 15);
        let mut records = vec![
            trip("past", "2025-01-01", "2025-01-10"),
            trip("later", "2025-09-01", "2025-09-10"),
            HolidayRecord::new("undated", HolidayDetails::new("?"), Utc::now()),
            trip("soon", "2025-07-01", "2025-07-10"),
            trip("now", "2025-06-10", "2025-06-20"),
        ];

        sort_for_dashboard(&mut records, today);

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["now", "undated", "soon", "later", "past"]);
    }

    #[test]
    fn test_sort_by_outbound_date_puts_undated_last() {
        let mut records = vec![
            HolidayRecord::new("undated", HolidayDetails::new("?"), Utc::now()),
            trip("b", "2025-08-01", ""),
            trip("bad", "someday", ""),
            trip("a", "2025-02-01", ""),
        ];

        sort_by_outbound_date(&mut records);

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "undated", "bad"]);
    }

    #[test]
    fn test_status_label_serialization() {
        assert_eq!(
            serde_json::to_string(&HolidayStatus::Upcoming).unwrap(),
            "\"upcoming\""
        );
        assert_eq!(HolidayStatus::Past.label(), "past");
    }
}
