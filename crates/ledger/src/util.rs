//! Internal helpers for date parsing.
//!
//! These utilities are **not** part of the public API.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a backend date string.
///
/// Accepts plain dates (`2024-01-31`, read as midnight), naive timestamps and
/// timestamps with an offset (converted to UTC). Returns `None` for anything
/// else.
pub(crate) fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    // Postgres `timestamptz` text form: `2024-01-31 10:00:00+00`.
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(dt.naive_utc());
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(start_of_day)
}

/// Parse an optional backend date, logging values that are present but
/// unreadable.
pub(crate) fn parse_optional_date(raw: Option<&str>, id: &str) -> Option<NaiveDateTime> {
    let raw = raw?;
    let parsed = parse_date(raw);
    if parsed.is_none() {
        tracing::warn!("unparseable date {raw:?} on transaction {id}");
    }
    parsed
}

pub(crate) fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_supported_shapes() {
        let midnight = start_of_day(ymd(2024, 1, 31));
        assert_eq!(parse_date("2024-01-31"), Some(midnight));
        assert_eq!(
            parse_date("2024-01-31T10:30:00"),
            ymd(2024, 1, 31).and_hms_opt(10, 30, 0)
        );
        assert_eq!(
            parse_date("2024-01-31 10:30:00.250"),
            ymd(2024, 1, 31).and_hms_milli_opt(10, 30, 0, 250)
        );
        assert_eq!(
            parse_date("2024-01-31T12:00:00+03:00"),
            ymd(2024, 1, 31).and_hms_opt(9, 0, 0)
        );
        assert_eq!(
            parse_date("2024-01-31 12:00:00+00"),
            ymd(2024, 1, 31).and_hms_opt(12, 0, 0)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(parse_optional_date(None, "x"), None);
    }
}
