//! Date formatting

use std::fmt::Write;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;

const NAIVE_DATE_TIME_PATTERNS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses an ISO-8601 string into the wall-clock time it describes.
///
/// Offsets are honoured for parsing but not converted: `2024-01-31T23:00:00+02:00`
/// displays as 23:00.
pub fn parse_iso(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_local());
    }
    for pattern in NAIVE_DATE_TIME_PATTERNS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, pattern) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Renders `value` with a `strftime` pattern.
///
/// Returns `None` if the pattern is invalid, so a bad configured pattern
/// degrades to the sentinel instead of panicking inside `Display`.
pub(super) fn render(value: &NaiveDateTime, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", value.format(pattern)).ok()?;
    Some(out)
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;
    use chrono::Timelike;

    use super::*;

    #[test]
    fn test_parse_variants() {
        let zoned = parse_iso("2024-01-31T23:15:00+02:00").unwrap();
        assert_eq!((zoned.day(), zoned.hour(), zoned.minute()), (31, 23, 15));

        let utc = parse_iso("2024-01-31T08:00:00.123Z").unwrap();
        assert_eq!(utc.hour(), 8);

        let naive = parse_iso("2024-02-01T10:30").unwrap();
        assert_eq!((naive.month(), naive.hour()), (2, 10));

        let date_only = parse_iso("2024-02-29").unwrap();
        assert_eq!((date_only.day(), date_only.hour()), (29, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_iso("").is_none());
        assert!(parse_iso("yesterday").is_none());
        assert!(parse_iso("2023-02-29").is_none());
    }

    #[test]
    fn test_render_bad_pattern() {
        let value = parse_iso("2024-01-31").unwrap();
        assert_eq!(render(&value, "%Y").as_deref(), Some("2024"));
        assert!(render(&value, "%Q").is_none());
    }
}
