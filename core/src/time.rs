//! Time related utils.

use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into the request timestamp: `2014-09-18T10:32:59Z`
///
/// ISO 8601 combined date and time in UTC, without fractional seconds.
pub fn format_utc_timestamp(t: DateTime) -> String {
    t.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
