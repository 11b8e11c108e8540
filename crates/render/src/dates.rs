use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%B %-d, %Y";

/// Format a publish date as `January 5, 2025`.
///
/// Accepts RFC 3339 timestamps, the naive `YYYY-MM-DDTHH:MM:SS[.fff]` form the
/// CMS stores for datetime fields, and bare `YYYY-MM-DD` dates. Anything else is
/// returned unchanged.
pub fn format_date(raw: &str) -> String {
    let value = raw.trim();

    let date = DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format(DISPLAY_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}
