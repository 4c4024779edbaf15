use std::io::{Read, Write};

use anyhow::{bail, Context};
use chrono::NaiveDate;
use serde::Serialize;

use itinerary_core::cache::Cache;
use itinerary_core::holiday::{
    days_until, holiday_status, sort_for_dashboard, trip_duration, HolidayDetails,
    HolidayRecord, HolidayStatus,
};
use itinerary_core::storage::RemoteConnector;

use super::{Commands, OutputFormat};
use crate::output::{format_output, pretty};
use crate::storage::HolidayStore;

/// A dashboard card as emitted in JSON output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardCard<'a> {
    status: HolidayStatus,
    days_until: Option<i64>,
    trip_duration: Option<i64>,
    #[serde(flatten)]
    holiday: &'a HolidayRecord,
}

/// Reads holiday fields from a JSON file, or stdin when `file` is `-`.
fn read_details(file: &str) -> anyhow::Result<HolidayDetails> {
    let json = if file == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read holiday JSON from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(file).with_context(|| format!("Failed to read {file}"))?
    };

    serde_json::from_str(&json).with_context(|| format!("Invalid holiday JSON in {file}"))
}

/// Runs one command against the store, writing results to `out`.
pub async fn execute<C, K, W>(
    command: Commands,
    store: &HolidayStore<C, K>,
    format: OutputFormat,
    quiet: bool,
    today: NaiveDate,
    out: &mut W,
) -> anyhow::Result<()>
where
    C: RemoteConnector,
    K: Cache + 'static,
    W: Write,
{
    match command {
        Commands::List => {
            let holidays = store.get_all().await;
            match format {
                OutputFormat::Json => writeln!(out, "{}", format_output(&holidays, format))?,
                OutputFormat::Pretty => writeln!(out, "{}", pretty::format_holidays(&holidays))?,
            }
        }
        Commands::Dashboard => {
            let mut holidays = store.get_all().await;
            sort_for_dashboard(&mut holidays, today);
            match format {
                OutputFormat::Json => {
                    let cards: Vec<DashboardCard<'_>> = holidays
                        .iter()
                        .map(|holiday| DashboardCard {
                            status: holiday_status(holiday, today),
                            days_until: holiday.outbound_date().map(|d| days_until(d, today)),
                            trip_duration: trip_duration(
                                holiday.outbound_date(),
                                holiday.return_date(),
                            ),
                            holiday,
                        })
                        .collect();
                    writeln!(out, "{}", format_output(&cards, format))?
                }
                OutputFormat::Pretty => {
                    writeln!(out, "{}", pretty::format_dashboard(&holidays, today))?
                }
            }
        }
        Commands::Show { id } => {
            let Some(holiday) = store.get_one(&id).await? else {
                bail!("Holiday not found: {id}");
            };
            match format {
                OutputFormat::Json => writeln!(out, "{}", format_output(&holiday, format))?,
                OutputFormat::Pretty => writeln!(out, "{}", pretty::format_holiday(&holiday))?,
            }
        }
        Commands::Add { file } => {
            let details = read_details(&file)?;
            let id = store.create(details).await?;
            match format {
                OutputFormat::Json => writeln!(
                    out,
                    "{}",
                    format_output(&serde_json::json!({ "id": id }), format)
                )?,
                OutputFormat::Pretty => match store.get_one(&id).await? {
                    Some(holiday) => {
                        writeln!(out, "Created:\n{}", pretty::format_holiday(&holiday))?
                    }
                    None => writeln!(out, "Created holiday {id}")?,
                },
            }
        }
        Commands::Update { id, file } => {
            let changes = read_details(&file)?;
            store.update(&id, changes).await?;
            let holiday = store.get_one(&id).await?;
            match (format, holiday) {
                (OutputFormat::Json, holiday) => {
                    writeln!(out, "{}", format_output(&holiday, format))?
                }
                (OutputFormat::Pretty, Some(holiday)) => {
                    if !quiet {
                        writeln!(out, "Updated:\n{}", pretty::format_holiday(&holiday))?
                    }
                }
                (OutputFormat::Pretty, None) => {
                    if !quiet {
                        writeln!(out, "No holiday with ID {id}, nothing updated")?
                    }
                }
            }
        }
        Commands::Delete { id } => {
            store.delete(&id).await?;
            if !quiet {
                writeln!(out, "Deleted holiday {id}")?;
            }
        }
    }

    Ok(())
}
