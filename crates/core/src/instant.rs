//! Parsing helpers for instants supplied by humans (CLI flags, env vars).
//!
//! Accepts RFC 3339 (`2015-12-02T09:30:00Z`, `2015-12-02T09:30:00+13:00`) or a
//! bare date (`2015-12-02`), which is taken as midnight UTC. Nothing here
//! depends on the local timezone or locale.

use chrono::{DateTime, NaiveDate, Utc};

/// Parses an instant from RFC 3339 or `YYYY-MM-DD`.
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>, String> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("invalid instant '{input}': expected RFC 3339 or YYYY-MM-DD"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_date_is_midnight_utc() {
        assert_eq!(
            parse_instant("2015-12-02").unwrap(),
            Utc.with_ymd_and_hms(2015, 12, 2, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_rfc3339_normalizes_offset() {
        assert_eq!(
            parse_instant("2015-12-02T13:00:00+13:00").unwrap(),
            Utc.with_ymd_and_hms(2015, 12, 2, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_instant("12/02/2015").is_err());
        assert!(parse_instant("").is_err());
    }
}
