//! Order-date parsing and the future-date cutoff.

use chrono::{NaiveDate, NaiveDateTime};

/// Formats accepted for order dates, tried in order.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse a date or datetime string. Date-only values resolve to midnight.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(parsed.and_hms_opt(0, 0, 0)?);
        }
    }
    None
}

/// True iff the value parses and is not after `now`. Equal-to-now is valid.
///
/// `now` is injected rather than read from the wall clock so runs and tests
/// are reproducible.
pub fn is_valid_date(value: Option<&str>, now: NaiveDateTime) -> bool {
    value
        .and_then(parse_datetime)
        .is_some_and(|parsed| parsed <= now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reference() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn accepts_past_and_rejects_future() {
        assert!(is_valid_date(Some("2024-06-14"), reference()));
        assert!(is_valid_date(Some("2024-06-15 11:59:59"), reference()));
        assert!(!is_valid_date(Some("2024-06-16"), reference()));
        assert!(!is_valid_date(Some("2030-01-01"), reference()));
    }

    #[test]
    fn equal_to_now_is_valid() {
        assert!(is_valid_date(Some("2024-06-15 12:00:00"), reference()));
    }

    #[test]
    fn rejects_missing_and_garbage() {
        assert!(!is_valid_date(None, reference()));
        assert!(!is_valid_date(Some(""), reference()));
        assert!(!is_valid_date(Some("not-a-date"), reference()));
        assert!(!is_valid_date(Some("2024-13-40"), reference()));
    }

    #[test]
    fn accepts_slash_formats() {
        assert!(is_valid_date(Some("2024/06/01"), reference()));
        assert!(is_valid_date(Some("06/01/2024"), reference()));
    }
}
