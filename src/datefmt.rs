//! Calendar date formatting for table cells.
//!
//! Store timestamps arrive as strings in a handful of shapes (RFC 3339,
//! bare dates, database timestamps with or without an offset). Cells show
//! them as `Mon D, YYYY`.

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Text shown for input no supported format accepts.
pub const INVALID_DATE: &str = "Invalid Date";

const DISPLAY_FORMAT: &str = "%b %-d, %Y";

const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%d %H:%M:%S%.f%#z"];

/// Parses `input` into a calendar date.
///
/// Offsets are kept: the date is the one local to the timestamp's own
/// offset, not converted to UTC.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let s = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    for fmt in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Ok(dt.date_naive());
        }
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }
    Err(Error::InvalidDate(input.to_string()))
}

/// Formats `input` as `Mon D, YYYY`, or fails.
pub fn try_format_date(input: &str) -> Result<String> {
    parse_date(input).map(|d| d.format(DISPLAY_FORMAT).to_string())
}

/// Formats `input` as `Mon D, YYYY`, or returns [`INVALID_DATE`].
///
/// ```rust
/// use bubbletea_datatable::datefmt::format_date;
///
/// assert_eq!(format_date("2024-01-05"), "Jan 5, 2024");
/// assert_eq!(format_date("2023-11-30T17:45:00Z"), "Nov 30, 2023");
/// assert_eq!(format_date("soon"), "Invalid Date");
/// ```
pub fn format_date(input: &str) -> String {
    match try_format_date(input) {
        Ok(s) => s,
        Err(e) => {
            tracing::debug!(input, error = %e, "unparseable date");
            INVALID_DATE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_shapes() {
        assert_eq!(format_date("2024-01-05"), "Jan 5, 2024");
        assert_eq!(format_date("2024-03-15T09:30:00"), "Mar 15, 2024");
        assert_eq!(format_date("2024-03-15T09:30:00.123456"), "Mar 15, 2024");
        assert_eq!(format_date("2024-03-15 09:30:00"), "Mar 15, 2024");
        assert_eq!(format_date("2024-03-15 09:30:00.5+00"), "Mar 15, 2024");
        assert_eq!(format_date("2024-12-31T23:59:59+02:00"), "Dec 31, 2024");
        assert_eq!(format_date("  2024-07-04  "), "Jul 4, 2024");
    }

    #[test]
    fn test_offset_date_is_not_shifted_to_utc() {
        // 23:30 at -05:00 is already the next day in UTC.
        assert_eq!(format_date("2024-02-10T23:30:00-05:00"), "Feb 10, 2024");
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(format_date(""), INVALID_DATE);
        assert_eq!(format_date("2024-02-30"), INVALID_DATE);
        assert_eq!(format_date("yesterday"), INVALID_DATE);
        assert!(matches!(try_format_date("nope"), Err(Error::InvalidDate(s)) if s == "nope"));
    }
}
