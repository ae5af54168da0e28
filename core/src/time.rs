//! Time related utils.

use crate::{Error, Result};
use chrono::SecondsFormat;

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<chrono::Utc>;

/// Get the current time in UTC.
pub fn now() -> DateTime {
    chrono::Utc::now()
}

/// Format a time into an ISO 8601 string with millisecond precision.
///
/// ```text
/// 2019-05-31T06:09:39.912Z
/// ```
pub fn format_iso8601_millis(t: DateTime) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an ISO 8601 string into a time.
pub fn parse_iso8601_millis(s: &str) -> Result<DateTime> {
    let t = chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|e| Error::unexpected(format!("parse '{s}' as ISO 8601 failed")).with_source(e))?;
    Ok(t.with_timezone(&chrono::Utc))
}

/// Current Unix time in milliseconds, as a decimal string.
pub fn unix_millis(t: DateTime) -> String {
    t.timestamp_millis().to_string()
}
