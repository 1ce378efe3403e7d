//! Timestamp parsing for the index column.
//!
//! Accepted forms, tried in order:
//! - RFC 3339 with offset: `2024-03-10T09:30:00-05:00` (converted to UTC)
//! - `2024-03-10 09:30:00+01:00` (space separator, with offset)
//! - `2024-03-10 09:30:00[.fraction]` / `2024-03-10T09:30:00[.fraction]`
//! - `2024-03-10 09:30` / `2024-03-10T09:30`
//! - `2024-03-10` (midnight)
//! - slash dates, year first or month first, with the same optional times:
//!   `2024/03/10 09:30:00`, `2024/03/10`, `03/10/2024 09:30`, `03/10/2024`
//!
//! Values without an offset are taken as UTC. Slash dates with the year last
//! are read month first, so `01/02/2023` is January 2nd.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse a timestamp field into a UTC instant.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
}
