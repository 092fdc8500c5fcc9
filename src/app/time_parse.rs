//! Parsing of `--since` / `--until` values.
//!
//! Times are given as `YYYY-MM-DDTHH:MM:SS` wall-clock values and always
//! interpreted as UTC.

#![warn(clippy::all, rust_2018_idioms)]

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{Error, Result};

/// chrono format of accepted time values
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a UTC wall-clock time in [`TIME_FORMAT`]
pub fn parse_time(value: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, TIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| {
            Error::invalid_argument(format!(
                "cannot parse time '{}' ({}); expected YYYY-MM-DDTHH:MM:SS in UTC",
                value, e
            ))
        })
}

/// Format an instant back into [`TIME_FORMAT`]
pub fn format_time(time: &DateTime<Utc>) -> String {
    time.format(TIME_FORMAT).to_string()
}
