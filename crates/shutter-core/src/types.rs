//! Custom types for common data structures

use chrono::{DateTime as ChronoDateTime, NaiveDateTime, Utc};

/// Database DateTime type used across all Shutter crates
///
/// Stored timestamps (`media.date_shot` included) are always UTC.
pub type DBDateTime = ChronoDateTime<Utc>;

/// Standard UTC DateTime type used for API-facing values such as the
/// timeline cursor.
pub type UtcDateTime = ChronoDateTime<Utc>;

/// Parse a user supplied timestamp into UTC.
///
/// Accepts:
/// - `2024-01-15T14:30:00` (naive datetime, assumes UTC)
/// - `2024-01-15T14:30:00Z`
/// - `2024-01-15T14:30:00+02:00` (converted to UTC)
pub fn parse_utc_datetime(value: &str) -> Result<UtcDateTime, chrono::ParseError> {
    match ChronoDateTime::parse_from_rfc3339(value) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(rfc_err) => NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
            .map(|naive| naive.and_utc())
            .map_err(|_| rfc_err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_naive_assumes_utc() {
        let dt = parse_utc_datetime("2021-03-05T10:00:00").unwrap();
        assert_eq!(dt.year(), 2021);
        assert_eq!(dt.month(), 3);
        assert_eq!(dt.day(), 5);
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn test_parse_offset_converts_to_utc() {
        let dt = parse_utc_datetime("2021-03-05T10:00:00+02:00").unwrap();
        assert_eq!(dt.hour(), 8);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_utc_datetime("yesterday").is_err());
    }
}
