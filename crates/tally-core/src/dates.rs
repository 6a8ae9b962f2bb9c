//! Permissive expense date parsing
//!
//! Expense dates come from arbitrary front-ends, so one fixed format is not
//! enough. Parsing goes through these stages:
//!
//! 1. Timestamps with an explicit numeric offset (RFC 3339, RFC 2822, or
//!    `2024-01-31 23:00:00 -05:00`) keep their written wall-clock time, so they
//!    stay in the month the user wrote.
//! 2. Compact `20240115` and year-month `2024-03` forms.
//! 3. `dateparser` handles everything else it knows (ISO dates, US month-first
//!    `mm/dd/yyyy`, written month names, unix timestamps). Zoneless input is
//!    read as UTC at midnight.
//! 4. Explicit chrono formats `dateparser` rejects: day-first, abbreviated
//!    months, `ctime` output with a zone name, month-year, and month-day
//!    without a year (which takes the current year).

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::RecordError;

/// Offset-carrying formats; the offset is kept, not applied
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S %:z", // 2024-01-31 23:00:00 -05:00
    "%Y-%m-%d %H:%M:%S %z",  // 2024-01-31 23:00:00 -0500
    "%Y-%m-%d %H:%M:%S%z",   // 2024-01-31 23:00:00-0500
    "%Y-%m-%dT%H:%M:%S%z",   // 2024-01-31T23:00:00-0500
];

/// Date-time formats tried after `dateparser` gives up
const DATETIME_FORMATS: [&str; 2] = [
    "%a %b %d %H:%M:%S %Z %Y", // Wed Jan 31 23:00:00 EST 2024 (zone name ignored)
    "%a %b %d %H:%M:%S %Y",    // Wed Jan 31 23:00:00 2024
];

/// Date formats tried after `dateparser` gives up
const DATE_FORMATS: [&str; 9] = [
    "%d/%m/%Y",  // 15/01/2024 (European)
    "%d.%m.%Y",  // 15.01.2024
    "%d-%m-%Y",  // 15-01-2024
    "%Y/%m/%d",  // 2024/01/15
    "%d %B %Y",  // 15 January 2024
    "%d %b %Y",  // 15 Jan 2024
    "%d-%b-%Y",  // 15-Jan-2024
    "%b %d %Y",  // Jan 15 2024
    "%b %d, %Y", // Jan 15, 2024
];

/// Parse an expense date string into a canonical date-time
///
/// A month and day without a year ("March 5") fall in the current year.
pub fn parse_expense_date(input: &str) -> Result<NaiveDateTime, RecordError> {
    parse_with_default_year(input, Utc::now().year())
}

fn parse_with_default_year(input: &str, default_year: i32) -> Result<NaiveDateTime, RecordError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(unparsable(input, "empty string"));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(dt.naive_local());
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Ok(dt.naive_local());
        }
    }

    // Checked before dateparser so digits-only input is never read as a timestamp
    if let Some(date) = parse_compact(s).or_else(|| parse_year_month(s)) {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    let reason = match dateparser::parse_with(s, &Utc, NaiveTime::MIN) {
        Ok(dt) => return Ok(dt.naive_utc()),
        Err(e) => e.to_string(),
    };

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }

    let date = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| parse_month_year(s))
        .or_else(|| parse_without_year(s, default_year));

    match date {
        Some(date) => Ok(date.and_time(NaiveTime::MIN)),
        None => Err(unparsable(input, &reason)),
    }
}

/// `20240115`
fn parse_compact(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(
        s[..4].parse().ok()?,
        s[4..6].parse().ok()?,
        s[6..].parse().ok()?,
    )
}

/// `2024-03` or `2024/03`: first of the month
fn parse_year_month(s: &str) -> Option<NaiveDate> {
    let (year, month) = s.split_once(|c| c == '-' || c == '/')?;
    if year.len() != 4
        || month.is_empty()
        || month.len() > 2
        || !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit())
    {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// `March 2024` or `Mar 2024`: first of the month
///
/// Only applies when the trailing token is a four-digit year.
fn parse_month_year(s: &str) -> Option<NaiveDate> {
    let (month, year) = s.rsplit_once(' ')?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let month = month.trim_end_matches(',');
    NaiveDate::parse_from_str(&format!("1 {} {}", month, year), "%d %b %Y").ok()
}

/// `March 5` or `5 March`, in `year`
fn parse_without_year(s: &str, year: i32) -> Option<NaiveDate> {
    let with_year = format!("{} {}", s, year);
    ["%b %d %Y", "%d %b %Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&with_year, fmt).ok())
}

fn unparsable(value: &str, reason: &str) -> RecordError {
    RecordError::UnparsableDate {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn ymd(dt: NaiveDateTime) -> (i32, u32, u32) {
        (dt.year(), dt.month(), dt.day())
    }

    #[test]
    fn test_parse_iso_date() {
        let dt = parse_expense_date("2024-01-15").unwrap();
        assert_eq!(ymd(dt), (2024, 1, 15));
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_parse_rfc3339_keeps_wall_clock_date() {
        let dt = parse_expense_date("2024-01-31T23:00:00-05:00").unwrap();
        assert_eq!(ymd(dt), (2024, 1, 31));
        assert_eq!(dt.hour(), 23);
    }

    #[test]
    fn test_parse_rfc3339_utc() {
        let dt = parse_expense_date("2024-02-10T08:30:00Z").unwrap();
        assert_eq!(ymd(dt), (2024, 2, 10));
    }

    #[test]
    fn test_parse_us_slash_date() {
        let dt = parse_expense_date("03/15/2024").unwrap();
        assert_eq!(ymd(dt), (2024, 3, 15));
    }

    #[test]
    fn test_ambiguous_slash_date_is_month_first() {
        let dt = parse_expense_date("01/02/2024").unwrap();
        assert_eq!(ymd(dt), (2024, 1, 2));
    }

    #[test]
    fn test_parse_written_month() {
        let dt = parse_expense_date("January 15, 2024").unwrap();
        assert_eq!(ymd(dt), (2024, 1, 15));
    }

    #[test]
    fn test_parse_day_first_fallback() {
        let dt = parse_expense_date("25/12/2023").unwrap();
        assert_eq!(ymd(dt), (2023, 12, 25));
    }

    #[test]
    fn test_parse_month_and_year_only() {
        let dt = parse_expense_date("March 2024").unwrap();
        assert_eq!((dt.year(), dt.month()), (2024, 3));
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        let dt = parse_expense_date("  2024-06-01 ").unwrap();
        assert_eq!(ymd(dt), (2024, 6, 1));
    }

    #[test]
    fn test_rejects_garbage() {
        let err = parse_expense_date("not-a-date").unwrap_err();
        assert!(matches!(err, RecordError::UnparsableDate { .. }));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(parse_expense_date("").is_err());
        assert!(parse_expense_date("   ").is_err());
    }

    #[test]
    fn test_space_separated_offset_keeps_wall_clock_date() {
        for input in ["2024-01-31 23:00:00 -05:00", "2024-01-31 23:00:00 -0500"] {
            let dt = parse_expense_date(input).unwrap();
            assert_eq!(ymd(dt), (2024, 1, 31), "input {}", input);
            assert_eq!(dt.hour(), 23);
        }
    }

    #[test]
    fn test_compact_offset_keeps_wall_clock_date() {
        let dt = parse_expense_date("2024-01-31T23:00:00-0500").unwrap();
        assert_eq!(ymd(dt), (2024, 1, 31));
    }

    #[test]
    fn test_parse_abbreviated_month_without_comma() {
        let dt = parse_expense_date("Jan 15 2024").unwrap();
        assert_eq!(ymd(dt), (2024, 1, 15));
    }

    #[test]
    fn test_parse_day_month_abbrev_dashes() {
        let dt = parse_expense_date("15-Jan-2024").unwrap();
        assert_eq!(ymd(dt), (2024, 1, 15));
    }

    #[test]
    fn test_parse_year_month() {
        assert_eq!(ymd(parse_expense_date("2024-03").unwrap()), (2024, 3, 1));
        assert_eq!(ymd(parse_expense_date("2024/11").unwrap()), (2024, 11, 1));
        assert!(parse_expense_date("2024-13").is_err());
    }

    #[test]
    fn test_parse_compact_date() {
        let dt = parse_expense_date("20240115").unwrap();
        assert_eq!(ymd(dt), (2024, 1, 15));
    }

    #[test]
    fn test_parse_ctime_with_zone_name() {
        let dt = parse_expense_date("Wed Jan 31 23:00:00 EST 2024").unwrap();
        assert_eq!(ymd(dt), (2024, 1, 31));
        assert_eq!(dt.hour(), 23);
    }

    #[test]
    fn test_month_day_without_year_uses_default_year() {
        let dt = parse_with_default_year("March 5", 2026).unwrap();
        assert_eq!(ymd(dt), (2026, 3, 5));

        let dt = parse_with_default_year("5 Mar", 2026).unwrap();
        assert_eq!(ymd(dt), (2026, 3, 5));
    }

    #[test]
    fn test_month_day_without_year_is_current_year() {
        let dt = parse_expense_date("March 5").unwrap();
        assert_eq!(dt.year(), Utc::now().year());
        assert_eq!(dt.month(), 3);
    }

    #[test]
    fn test_month_year_needs_four_digit_year() {
        assert_eq!(parse_month_year("March 5"), None);
        assert_eq!(parse_month_year("March 24"), None);
        assert_eq!(
            parse_month_year("Mar 2024"),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }
}
