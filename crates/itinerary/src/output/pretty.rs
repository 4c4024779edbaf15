//! Pretty output formatting.

use chrono::NaiveDate;

use itinerary_core::holiday::{
    days_until, holiday_status, trip_duration, HolidayRecord, HolidayStatus,
};

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// One line per flight leg, or `None` when nothing about the leg is known.
fn format_leg(
    label: &str,
    from: Option<&str>,
    to: Option<&str>,
    date: Option<&str>,
    time: Option<&str>,
    flight: Option<&str>,
    terminal: Option<&str>,
) -> Option<String> {
    if [from, to, date, time, flight, terminal].iter().all(Option::is_none) {
        return None;
    }

    let mut line = format!(
        "\n  {label}: {} -> {}",
        from.unwrap_or("?"),
        to.unwrap_or("?")
    );
    if let Some(date) = date {
        line.push_str(&format!(" on {date}"));
    }
    if let Some(time) = time {
        line.push_str(&format!(" at {time}"));
    }
    if let Some(flight) = flight {
        line.push_str(&format!(" (flight {flight}"));
        match terminal {
            Some(terminal) => line.push_str(&format!(", terminal {terminal})")),
            None => line.push(')'),
        }
    } else if let Some(terminal) = terminal {
        line.push_str(&format!(" (terminal {terminal})"));
    }
    Some(line)
}

/// Format a holiday with every known detail.
pub fn format_holiday(holiday: &HolidayRecord) -> String {
    let details = &holiday.details;
    let mut output = format!("{}\n  ID: {}", holiday.display_name(), holiday.id);

    if let Some(line) = format_leg(
        "Outbound",
        details.outbound_from.as_deref(),
        details.outbound_to.as_deref(),
        details.outbound_date.as_deref(),
        details.outbound_time.as_deref(),
        details.outbound_flight_number.as_deref(),
        details.outbound_terminal.as_deref(),
    ) {
        output.push_str(&line);
    }
    if let Some(line) = format_leg(
        "Return",
        details.return_from.as_deref(),
        details.return_to.as_deref(),
        details.return_date.as_deref(),
        details.return_time.as_deref(),
        details.return_flight_number.as_deref(),
        details.return_terminal.as_deref(),
    ) {
        output.push_str(&line);
    }

    if let Some(days) = trip_duration(holiday.outbound_date(), holiday.return_date()) {
        output.push_str(&format!("\n  Duration: {}", plural(days, "day")));
    }

    for hotel in holiday.hotels() {
        output.push_str(&format!("\n  Hotel: {}", hotel.name));
        if !hotel.check_in.is_empty() || !hotel.check_out.is_empty() {
            output.push_str(&format!(" ({} to {})", hotel.check_in, hotel.check_out));
        }
        if !hotel.address.is_empty() {
            output.push_str(&format!(", {}", hotel.address));
        }
    }

    for activity in holiday.activities() {
        if activity.date.is_empty() {
            output.push_str(&format!("\n  Activity: {}", activity.description));
        } else {
            output.push_str(&format!(
                "\n  Activity: {} ({})",
                activity.description, activity.date
            ));
        }
    }

    if let Some(notes) = &details.other_notes {
        output.push_str("\n  Notes:");
        for line in notes.lines() {
            output.push_str(&format!("\n    {line}"));
        }
    }

    output
}

/// Format holidays for display.
pub fn format_holidays(holidays: &[HolidayRecord]) -> String {
    if holidays.is_empty() {
        return "No holidays found.".to_string();
    }
    let mut output = format!("HOLIDAYS ({})\n", holidays.len());
    output.push_str(&"-".repeat(40));
    for holiday in holidays {
        output.push_str(&format!("\n{}", format_holiday(holiday)));
        output.push('\n');
    }
    output
}

/// Countdown text for a holiday card.
pub fn format_countdown(holiday: &HolidayRecord, today: NaiveDate) -> String {
    match holiday_status(holiday, today) {
        HolidayStatus::Upcoming => {
            let days = holiday.outbound_date().map_or(0, |date| days_until(date, today));
            format!("{} until departure", plural(days.abs(), "day"))
        }
        HolidayStatus::Current => match (holiday.outbound_date(), holiday.return_date()) {
            (_, Some(date)) => format!("Enjoy! {} left", plural(days_until(date, today), "day")),
            (None, None) => "Date to be confirmed".to_string(),
            (Some(_), None) => "Enjoy!".to_string(),
        },
        HolidayStatus::Past => match holiday.details.outbound_date.as_deref() {
            Some(date) => format!("Completed {date}"),
            None => "Completed".to_string(),
        },
    }
}

/// Format a dashboard card.
pub fn format_card(holiday: &HolidayRecord, today: NaiveDate) -> String {
    let status = holiday_status(holiday, today);
    let mut output = format!(
        "{} [{}]\n  {}",
        holiday.display_name(),
        status.label(),
        format_countdown(holiday, today)
    );
    if let Some(days) = trip_duration(holiday.outbound_date(), holiday.return_date()) {
        output.push_str(&format!("\n  {} holiday", plural(days, "day")));
    }
    output.push_str(&format!("\n  ID: {}", holiday.id));
    output
}

/// Format the dashboard. `holidays` should already be in dashboard order.
pub fn format_dashboard(holidays: &[HolidayRecord], today: NaiveDate) -> String {
    if holidays.is_empty() {
        return "No holidays planned yet.".to_string();
    }
    let mut output = format!("DASHBOARD ({})\n", today.format("%Y-%m-%d"));
    output.push_str(&"-".repeat(40));
    for holiday in holidays {
        output.push_str(&format!("\n{}", format_card(holiday, today)));
        output.push('\n');
    }
    output
}
