use super::types::{Activity, HolidayDetails, Hotel};

/// Returns true for characters allowed in persisted text: ASCII word
/// characters, whitespace, and `- . : @ /`.
fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c == '_'
        || c.is_whitespace()
        || matches!(c, '-' | '.' | ':' | '@' | '/')
}

/// Strips every character outside the persistence whitelist.
pub fn sanitize(input: &str) -> String {
    input.chars().filter(|c| is_allowed(*c)).collect()
}

/// Types whose text fields can be sanitized before persistence.
///
/// Implementations recurse into nested hotels and activities.
pub trait Sanitize {
    #[must_use]
    fn sanitized(self) -> Self;
}

fn sanitize_opt(value: Option<String>) -> Option<String> {
    value.map(|v| sanitize(&v))
}

impl Sanitize for Hotel {
    fn sanitized(self) -> Self {
        Self {
            name: sanitize(&self.name),
            check_in: sanitize(&self.check_in),
            check_out: sanitize(&self.check_out),
            address: sanitize(&self.address),
        }
    }
}

impl Sanitize for Activity {
    fn sanitized(self) -> Self {
        Self {
            description: sanitize(&self.description),
            date: sanitize(&self.date),
        }
    }
}

impl<T: Sanitize> Sanitize for Vec<T> {
    fn sanitized(self) -> Self {
        self.into_iter().map(Sanitize::sanitized).collect()
    }
}

impl Sanitize for HolidayDetails {
    fn sanitized(self) -> Self {
        Self {
            destination: sanitize_opt(self.destination),
            outbound_from: sanitize_opt(self.outbound_from),
            outbound_to: sanitize_opt(self.outbound_to),
            outbound_date: sanitize_opt(self.outbound_date),
            outbound_time: sanitize_opt(self.outbound_time),
            outbound_flight_number: sanitize_opt(self.outbound_flight_number),
            outbound_terminal: sanitize_opt(self.outbound_terminal),
            return_from: sanitize_opt(self.return_from),
            return_to: sanitize_opt(self.return_to),
            return_date: sanitize_opt(self.return_date),
            return_time: sanitize_opt(self.return_time),
            return_flight_number: sanitize_opt(self.return_flight_number),
            return_terminal: sanitize_opt(self.return_terminal),
            hotels: self.hotels.map(Sanitize::sanitized),
            activities: self.activities.map(Sanitize::sanitized),
            other_notes: sanitize_opt(self.other_notes),
        }
    }
}
