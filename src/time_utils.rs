// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for post timestamps.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Timestamp layout used by the post export once the leading weekday name
/// (e.g. `Mon ` in `Mon Jan 01 10:00:00 +0000 2024`) is dropped.
pub const POST_TIME_FORMAT: &str = "%b %d %H:%M:%S %z %Y";

/// ISO date-time without an offset, read as UTC.
const NAIVE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Bare calendar date, read as UTC midnight.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Weekday labels indexed from Sunday.
pub const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Parse a post's `created_at` value.
///
/// Tries the export layout, RFC 3339, an offset-less ISO date-time and a
/// bare date, in that order. The export layout's weekday name is not
/// checked against the date. Returns `None` when nothing matches; the value
/// is carried forward unparsed, not defaulted.
pub fn parse_created_at(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    parse_export_layout(raw)
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok())
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, NAIVE_DATETIME_FORMAT)
                .ok()
                .map(|n| n.and_utc().fixed_offset())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|n| n.and_utc().fixed_offset())
        })
}

/// Export layout with the leading weekday token skipped.
fn parse_export_layout(raw: &str) -> Option<DateTime<FixedOffset>> {
    let (weekday, rest) = raw.split_once(' ')?;
    if !weekday.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    DateTime::parse_from_str(rest.trim_start(), POST_TIME_FORMAT).ok()
}

/// Three-letter weekday label, evaluated in the timestamp's own offset.
pub fn day_of_week(time: &DateTime<FixedOffset>) -> &'static str {
    DAY_LABELS[time.weekday().num_days_from_sunday() as usize]
}

/// Whether a weekday label falls on the weekend.
pub fn is_weekend(day: &str) -> bool {
    day == "Sat" || day == "Sun"
}

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_export_format() {
        let time = parse_created_at("Mon Jan 01 10:00:00 +0000 2024").expect("should parse");
        assert_eq!(
            format_utc_rfc3339(time.with_timezone(&Utc)),
            "2024-01-01T10:00:00Z"
        );
        assert_eq!(day_of_week(&time), "Mon");
    }

    #[test]
    fn test_parse_rfc3339_fallback() {
        let time = parse_created_at("2024-01-06T08:30:00Z").expect("should parse");
        assert_eq!(day_of_week(&time), "Sat");
    }

    #[test]
    fn test_weekday_name_not_checked_against_date() {
        // 2024-01-01 is a Monday; the stated weekday is ignored
        let time = parse_created_at("Tue Jan 01 10:00:00 +0000 2024").expect("should parse");
        assert_eq!(
            format_utc_rfc3339(time.with_timezone(&Utc)),
            "2024-01-01T10:00:00Z"
        );
        assert_eq!(day_of_week(&time), "Mon");
    }

    #[test]
    fn test_parse_bare_date_as_utc_midnight() {
        let time = parse_created_at("2024-01-01").expect("should parse");
        assert_eq!(
            format_utc_rfc3339(time.with_timezone(&Utc)),
            "2024-01-01T00:00:00Z"
        );
        assert_eq!(day_of_week(&time), "Mon");
    }

    #[test]
    fn test_parse_iso_without_offset_as_utc() {
        let time = parse_created_at("2024-01-01T10:00:00").expect("should parse");
        assert_eq!(
            format_utc_rfc3339(time.with_timezone(&Utc)),
            "2024-01-01T10:00:00Z"
        );

        let time = parse_created_at("2024-01-06T08:30:00.250").expect("should parse");
        assert_eq!(day_of_week(&time), "Sat");
    }

    #[test]
    fn test_unparseable_is_none() {
        assert!(parse_created_at("").is_none());
        assert!(parse_created_at("yesterday-ish").is_none());
        assert!(parse_created_at("Mon Foo 01 10:00:00 +0000 2024").is_none());
        assert!(parse_created_at("2024-13-01").is_none());
    }

    #[test]
    fn test_weekday_uses_own_offset() {
        // 23:30 on Sunday at -0800 is already Monday in UTC
        let time = parse_created_at("Sun Jan 07 23:30:00 -0800 2024").expect("should parse");
        assert_eq!(day_of_week(&time), "Sun");
    }

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend("Sat"));
        assert!(is_weekend("Sun"));
        assert!(!is_weekend("Wed"));
    }
}
