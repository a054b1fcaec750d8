pub mod config;
pub mod dashboard;
pub mod series;

use chrono::{Local, NaiveDate};

/// Parse an optional `YYYY-MM-DD` argument, falling back to the local date.
pub(crate) fn parse_day(arg: Option<&str>) -> anyhow::Result<NaiveDate> {
    match arg {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| anyhow::anyhow!("invalid date '{s}': {e}")),
        None => Ok(Local::now().date_naive()),
    }
}
