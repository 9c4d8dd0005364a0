//! Per-value predicates shared by type inference and validity scoring.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

// =============================================================================
// LAZY STATIC PATTERNS
// =============================================================================
// Cheap shape checks run before any chrono format is attempted.

static DATE_SHAPES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d{4}[-/]\d{1,2}[-/]\d{1,2}").unwrap(), // ISO date
        Regex::new(r"^\d{1,2}[-/.]\d{1,2}[-/.]\d{4}").unwrap(), // US / European date
        Regex::new(r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\b").unwrap(), // Month name
    ]
});

/// Tokens accepted as boolean, compared case-insensitively.
pub const BOOLEAN_TOKENS: &[&str] = &["true", "false", "yes", "no", "1", "0", "y", "n"];

const TRUE_TOKENS: &[&str] = &["true", "yes", "1", "y"];

/// Datetime formats tried in order after RFC 3339 and RFC 2822.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
    "%d.%m.%Y %H:%M:%S%.f",
];

/// Date-only formats tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
    "%d %b %Y",
    "%d %B %Y",
    "%d-%b-%Y",
];

/// Check if a value is one of the boolean tokens.
pub fn is_boolean(value: &str) -> bool {
    parse_boolean(value).is_some()
}

/// Parse a boolean token into its truth value.
pub fn parse_boolean(value: &str) -> Option<bool> {
    let lower = value.trim().to_ascii_lowercase();
    if !BOOLEAN_TOKENS.contains(&lower.as_str()) {
        return None;
    }
    Some(TRUE_TOKENS.contains(&lower.as_str()))
}

/// Parse a value as a finite number.
pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Check if a value parses as a finite number.
pub fn is_numeric(value: &str) -> bool {
    parse_number(value).is_some()
}

/// Check if a number has no fractional part.
pub fn is_whole(number: f64) -> bool {
    number.fract() == 0.0
}

/// Parse a value as a date or timestamp.
///
/// Timezone-aware inputs are converted to UTC before the offset is dropped.
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.len() < 6 || !trimmed.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    if !DATE_SHAPES.iter().any(|shape| shape.is_match(trimmed)) {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(dt.naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Check if a value parses as a date.
pub fn is_date(value: &str) -> bool {
    parse_date(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_tokens() {
        for token in ["true", "FALSE", "Yes", "no", "1", "0", "Y", "n"] {
            assert!(is_boolean(token), "{} should be boolean", token);
        }
        assert!(!is_boolean("t"));
        assert!(!is_boolean("maybe"));
        assert_eq!(parse_boolean("YES"), Some(true));
        assert_eq!(parse_boolean("0"), Some(false));
    }

    #[test]
    fn test_numbers_must_be_finite() {
        assert_eq!(parse_number("3.5"), Some(3.5));
        assert_eq!(parse_number("-2"), Some(-2.0));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("12abc"), None);
    }

    #[test]
    fn test_whole_numbers() {
        assert!(is_whole(4.0));
        assert!(!is_whole(4.5));
    }

    #[test]
    fn test_date_formats() {
        let accepted = [
            "2024-01-15",
            "2024/01/15",
            "2024-01-15T10:30:00",
            "2024-01-15T10:30:00Z",
            "2024-01-15T10:30:00+02:00",
            "2024-01-15 10:30:00.250",
            "01/15/2024",
            "15-01-2024",
            "15.01.2024",
            "Jan 15, 2024",
            "15 January 2024",
            "Mon, 15 Jan 2024 10:30:00 +0000",
        ];
        for value in accepted {
            assert!(is_date(value), "{} should parse as a date", value);
        }
    }

    #[test]
    fn test_non_dates() {
        for value in ["hello", "12345", "2024", "2024-13-45", "1.5", "N/A", "Mayor"] {
            assert!(!is_date(value), "{} should not parse as a date", value);
        }
    }

    #[test]
    fn test_timezone_normalized_to_utc() {
        let parsed = parse_date("2024-01-15T10:30:00+02:00").unwrap();
        assert_eq!(parsed.to_string(), "2024-01-15 08:30:00");
    }

    #[test]
    fn test_date_only_is_midnight() {
        let parsed = parse_date("03/04/2024").unwrap();
        assert_eq!(parsed.to_string(), "2024-03-04 00:00:00");
    }
}
