//! Format detection for string values

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Detected string format relevant to column typing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    /// UUID/GUID in canonical 8-4-4-4-12 form
    Uuid,
    /// Calendar date or date-time starting with YYYY-MM-DD
    Timestamp,
    /// No specific format detected
    None,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Uuid => write!(f, "uuid"),
            Format::Timestamp => write!(f, "timestamp"),
            Format::None => write!(f, "none"),
        }
    }
}

static UUID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap()
});

static DATE_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap());

/// Naive date-time layouts accepted after the date prefix check
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Offset-carrying layouts not covered by RFC 3339 (e.g. `+0100`, space separator)
const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
];

/// Check whether a string is a canonical UUID (case-insensitive)
pub fn is_uuid(value: &str) -> bool {
    UUID_REGEX.is_match(value)
}

/// Check whether a string is a timestamp.
///
/// Both conditions must hold: the text starts with a literal
/// `YYYY-MM-DD` prefix, and the whole string parses as a valid
/// calendar date or date-time.
pub fn is_timestamp(value: &str) -> bool {
    if !DATE_PREFIX_REGEX.is_match(value) {
        return false;
    }
    parses_as_datetime(value)
}

fn parses_as_datetime(value: &str) -> bool {
    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok() {
        return true;
    }

    if DateTime::parse_from_rfc3339(value).is_ok() {
        return true;
    }

    // chrono does not accept a bare `Z` through `%z`
    let zulu_stripped = value
        .strip_suffix('Z')
        .or_else(|| value.strip_suffix('z'))
        .unwrap_or(value);

    if NAIVE_DATETIME_FORMATS
        .iter()
        .any(|fmt| NaiveDateTime::parse_from_str(zulu_stripped, fmt).is_ok())
    {
        return true;
    }

    OFFSET_DATETIME_FORMATS
        .iter()
        .any(|fmt| DateTime::parse_from_str(value, fmt).is_ok())
}

/// Detect the format of a string value.
///
/// UUID is checked before timestamp since it is the more specific pattern.
pub fn detect_format(value: &str) -> Format {
    if is_uuid(value) {
        return Format::Uuid;
    }

    if is_timestamp(value) {
        return Format::Timestamp;
    }

    Format::None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_uuid() {
        assert_eq!(
            detect_format("550e8400-e29b-41d4-a716-446655440000"),
            Format::Uuid
        );
        assert_eq!(
            detect_format("550E8400-E29B-41D4-A716-446655440000"),
            Format::Uuid
        );
        assert_ne!(
            detect_format("550e8400e29b41d4a716446655440000"),
            Format::Uuid
        );
        assert_ne!(
            detect_format("550e8400-e29b-41d4-a716-44665544000g"),
            Format::Uuid
        );
    }

    #[test]
    fn test_detect_timestamp() {
        assert_eq!(detect_format("2024-01-15"), Format::Timestamp);
        assert_eq!(detect_format("2024-01-15T10:30:00Z"), Format::Timestamp);
        assert_eq!(detect_format("2024-01-15T10:30:00.123Z"), Format::Timestamp);
        assert_eq!(detect_format("2024-01-15T10:30:00+05:00"), Format::Timestamp);
        assert_eq!(detect_format("2024-01-15 10:30:00"), Format::Timestamp);
        assert_eq!(detect_format("2024-01-15T10:30"), Format::Timestamp);
    }

    #[test]
    fn test_prefix_required() {
        // Parseable dates without the literal YYYY-MM-DD prefix are not timestamps
        assert_eq!(detect_format("01/15/2024"), Format::None);
        assert_eq!(detect_format("2024"), Format::None);
        assert_eq!(detect_format("Jan 15 2024"), Format::None);
    }

    #[test]
    fn test_invalid_calendar_values() {
        assert_eq!(detect_format("2024-13-45"), Format::None);
        assert_eq!(detect_format("2024-02-30"), Format::None);
        assert_eq!(detect_format("2024-01-15 trailing words"), Format::None);
    }

    #[test]
    fn test_plain_strings() {
        assert_eq!(detect_format("hello"), Format::None);
        assert_eq!(detect_format(""), Format::None);
        assert_eq!(detect_format("ORD-2024-001"), Format::None);
    }
}
