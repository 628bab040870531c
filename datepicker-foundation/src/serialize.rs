//! Conversion between serialized picker values and [`CalendarDate`].
//!
//! Values are written in local wall-clock time. Date-only strings are never
//! routed through UTC, so a `YYYY-MM-DD` value reads back as the same day in
//! every timezone.
use std::fmt;

use chrono::{Days, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone};
use tracing::debug;

use crate::{calendar_date::CalendarDate, error::DateParseError};

const DATE_LEN: usize = 10;
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Reads a serialized value, returning `None` for empty or invalid input.
///
/// Accepts `YYYY-MM-DD`, optionally followed by `T` or a space and a time of
/// day (`HH:mm`, `HH:mm:ss`, `HH:mm:ss.fff`), optionally followed by `Z` or a
/// `±HH:MM` offset. Inputs with an explicit offset are converted into local
/// wall-clock time.
pub fn parse_to_calendar_date(input: Option<&str>) -> Option<CalendarDate> {
    let input = input?;
    match parse_calendar_date(input) {
        Ok(date) => Some(date),
        Err(err) => {
            debug!("ignoring unparsable date value {input:?}: {err}");
            None
        }
    }
}

/// Reads a serialized value, reporting which component was malformed.
pub fn parse_calendar_date(input: &str) -> Result<CalendarDate, DateParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DateParseError::Empty);
    }
    let (date_text, rest) = trimmed
        .split_at_checked(DATE_LEN)
        .ok_or_else(|| DateParseError::InvalidDate(trimmed.to_string()))?;
    let date = parse_date_component(date_text)?;
    if rest.is_empty() {
        return Ok(CalendarDate::from_naive(date.and_time(NaiveTime::MIN)));
    }

    let mut chars = rest.chars();
    match chars.next() {
        Some('T' | 't' | ' ') => {}
        _ => return Err(DateParseError::InvalidSeparator(trimmed.to_string())),
    }
    let clock = chars.as_str();
    let (time_text, offset_text) = match clock.find(['Z', 'z', '+', '-']) {
        Some(index) => clock.split_at(index),
        None => (clock, ""),
    };
    let time = parse_time_component(time_text)?;
    let naive = date.and_time(time);
    if offset_text.is_empty() {
        return Ok(CalendarDate::from_naive(naive));
    }

    let offset = parse_offset(offset_text)?;
    let instant = offset
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| DateParseError::UnmappableTime(trimmed.to_string()))?;
    Ok(CalendarDate::from_naive(
        instant.with_timezone(&Local).naive_local(),
    ))
}

/// Formats the date portion as `YYYY-MM-DD`.
pub fn to_date_string(date: &CalendarDate) -> String {
    date.naive().format("%Y-%m-%d").to_string()
}

/// Formats the value as `YYYY-MM-DDTHH:mm:ss` without an offset.
pub fn to_date_time_string(date: &CalendarDate) -> String {
    date.naive().format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Formats the value as a full ISO instant carrying the local offset.
///
/// The wall-clock fields are written unchanged and the offset the local zone
/// has at that moment is appended. A wall-clock time inside a daylight-saving
/// gap does not exist locally; it is moved forward by the length of the gap,
/// so the written instant reads back as the later wall-clock time.
pub fn to_iso_string(date: &CalendarDate) -> String {
    iso_string_in(&Local, &date.naive())
}

fn iso_string_in<Tz: TimeZone>(zone: &Tz, naive: &NaiveDateTime) -> String
where
    Tz::Offset: fmt::Display,
{
    if let Some(instant) = zone.from_local_datetime(naive).earliest() {
        return instant.format(ISO_FORMAT).to_string();
    }

    let before_gap = naive
        .checked_sub_days(Days::new(1))
        .and_then(|earlier| zone.offset_from_local_datetime(&earlier).earliest())
        .map(|offset| offset.fix())
        .unwrap_or_else(|| zone.offset_from_utc_datetime(naive).fix());
    match naive.checked_sub_offset(before_gap) {
        Some(utc) => {
            let instant = zone.from_utc_datetime(&utc);
            debug!("{naive} falls in a local gap, writing {}", instant.naive_local());
            instant.format(ISO_FORMAT).to_string()
        }
        None => naive.format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
    }
}

/// Formats the date as `DD/MM/YYYY`.
pub fn format_display_date(date: &CalendarDate) -> String {
    date.naive().format("%d/%m/%Y").to_string()
}

/// Formats the value as `DD/MM/YYYY HH:mm`.
pub fn format_display_date_time(date: &CalendarDate) -> String {
    date.naive().format("%d/%m/%Y %H:%M").to_string()
}

/// Formats the time of day as `HH:mm`.
pub fn format_time_of_day(date: &CalendarDate) -> String {
    date.naive().format("%H:%M").to_string()
}

fn parse_date_component(text: &str) -> Result<NaiveDate, DateParseError> {
    let invalid = || DateParseError::InvalidDate(text.to_string());
    let bytes = text.as_bytes();
    if bytes.len() != DATE_LEN || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(invalid());
    }
    let year = parse_digits(&text[0..4]).ok_or_else(invalid)?;
    let month = parse_digits(&text[5..7]).ok_or_else(invalid)?;
    let day = parse_digits(&text[8..10]).ok_or_else(invalid)?;
    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(invalid)
}

fn parse_time_component(text: &str) -> Result<NaiveTime, DateParseError> {
    let invalid = || DateParseError::InvalidTime(text.to_string());
    let mut parts = text.split(':');
    let hour = parts.next().filter(|p| p.len() == 2).and_then(parse_digits);
    let minute = parts.next().filter(|p| p.len() == 2).and_then(parse_digits);
    let (Some(hour), Some(minute)) = (hour, minute) else {
        return Err(invalid());
    };

    let (second, millisecond) = match parts.next() {
        None => (0, 0),
        Some(seconds) => {
            let (whole, fraction) = seconds.split_once('.').unwrap_or((seconds, ""));
            if whole.len() != 2 {
                return Err(invalid());
            }
            let second = parse_digits(whole).ok_or_else(invalid)?;
            let millisecond = if seconds.contains('.') {
                parse_fraction_millis(fraction).ok_or_else(invalid)?
            } else {
                0
            };
            (second, millisecond)
        }
    };
    if parts.next().is_some() {
        return Err(invalid());
    }
    NaiveTime::from_hms_milli_opt(hour, minute, second, millisecond).ok_or_else(invalid)
}

fn parse_offset(text: &str) -> Result<FixedOffset, DateParseError> {
    let invalid = || DateParseError::InvalidOffset(text.to_string());
    if text.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }
    let (sign, body) = match text.split_at_checked(1) {
        Some(("+", body)) => (1, body),
        Some(("-", body)) => (-1, body),
        _ => return Err(invalid()),
    };
    let digits: String = body.chars().filter(|c| *c != ':').collect();
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let (hours, minutes) = match digits.len() {
        2 => (parse_digits(&digits), Some(0)),
        4 => (parse_digits(&digits[..2]), parse_digits(&digits[2..])),
        _ => (None, None),
    };
    let (Some(hours), Some(minutes)) = (hours, minutes) else {
        return Err(invalid());
    };
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }
    FixedOffset::east_opt(sign * (hours as i32 * 3_600 + minutes as i32 * 60)).ok_or_else(invalid)
}

fn parse_digits(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn parse_fraction_millis(fraction: &str) -> Option<u32> {
    if fraction.is_empty() || fraction.len() > 9 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut padded: String = fraction.chars().take(3).collect();
    while padded.len() < 3 {
        padded.push('0');
    }
    padded.parse().ok()
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, LocalResult};

    use super::*;

    fn timed(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> CalendarDate {
        CalendarDate::from_parts(y, mo, d, h, mi, s, ms).expect("valid test date")
    }

    #[test]
    fn test_parse_date_only() {
        let parsed = parse_to_calendar_date(Some("2025-03-15")).expect("parses");
        assert_eq!(parsed, timed(2025, 3, 15, 0, 0, 0, 0));
    }

    #[test]
    fn test_parse_with_time_variants() {
        assert_eq!(
            parse_to_calendar_date(Some("2025-03-15T09:30")),
            Some(timed(2025, 3, 15, 9, 30, 0, 0))
        );
        assert_eq!(
            parse_to_calendar_date(Some("2025-03-15 09:30:15")),
            Some(timed(2025, 3, 15, 9, 30, 15, 0))
        );
        assert_eq!(
            parse_to_calendar_date(Some("2025-03-15T09:30:15.1234")),
            Some(timed(2025, 3, 15, 9, 30, 15, 123))
        );
        assert_eq!(
            parse_to_calendar_date(Some("  2025-03-15T23:59:59.999  ")),
            Some(timed(2025, 3, 15, 23, 59, 59, 999))
        );
    }

    #[test]
    fn test_parse_offset_converts_to_local() {
        let utc = FixedOffset::east_opt(0).expect("utc offset");
        let expected = utc
            .from_local_datetime(&timed(2025, 3, 15, 12, 0, 0, 0).naive())
            .single()
            .expect("fixed offsets are unambiguous")
            .with_timezone(&Local)
            .naive_local();
        assert_eq!(
            parse_to_calendar_date(Some("2025-03-15T12:00:00Z")),
            Some(CalendarDate::from_naive(expected))
        );
        assert_eq!(
            parse_to_calendar_date(Some("2025-03-15T09:00:00-03:00")),
            Some(CalendarDate::from_naive(expected))
        );
        assert_eq!(
            parse_to_calendar_date(Some("2025-03-15T15:00:00+0300")),
            Some(CalendarDate::from_naive(expected))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_to_calendar_date(None), None);
        assert_eq!(parse_calendar_date(""), Err(DateParseError::Empty));
        assert_eq!(parse_calendar_date("   "), Err(DateParseError::Empty));
        assert!(matches!(
            parse_calendar_date("not-a-date"),
            Err(DateParseError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_calendar_date("2025-02-30"),
            Err(DateParseError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_calendar_date("2025/03/15"),
            Err(DateParseError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_calendar_date("2025-03-15X10:00"),
            Err(DateParseError::InvalidSeparator(_))
        ));
        assert!(matches!(
            parse_calendar_date("2025-03-15Tnope"),
            Err(DateParseError::InvalidTime(_))
        ));
        assert!(matches!(
            parse_calendar_date("2025-03-15T25:00"),
            Err(DateParseError::InvalidTime(_))
        ));
        assert!(matches!(
            parse_calendar_date("2025-03-15T10:00+25:00"),
            Err(DateParseError::InvalidOffset(_))
        ));
        assert_eq!(parse_to_calendar_date(Some("2025-3-5")), None);
        assert_eq!(parse_to_calendar_date(Some("2025-03-15T")), None);
    }

    #[test]
    fn test_date_string_round_trip() {
        let samples = [
            timed(2025, 3, 15, 0, 0, 0, 0),
            timed(2024, 2, 29, 13, 45, 0, 0),
            timed(1999, 12, 31, 23, 59, 59, 999),
            timed(2030, 1, 1, 6, 7, 8, 9),
        ];
        for sample in samples {
            let parsed =
                parse_to_calendar_date(Some(&to_date_string(&sample))).expect("round trip");
            assert!(parsed.is_same_day(&sample));
        }
    }

    #[test]
    fn test_iso_string_round_trip() {
        let samples = [
            timed(2025, 3, 1, 9, 0, 0, 0),
            timed(2025, 7, 14, 17, 30, 42, 0),
            timed(2024, 12, 31, 23, 59, 59, 999),
        ];
        for sample in samples {
            let serialized = to_iso_string(&sample);
            let parsed = parse_to_calendar_date(Some(&serialized)).expect("round trip");
            assert_eq!(parsed.naive().date(), sample.naive().date());
            assert_eq!(
                (parsed.hour(), parsed.minute(), parsed.second()),
                (sample.hour(), sample.minute(), sample.second())
            );
        }
    }

    #[test]
    fn test_iso_string_keeps_wall_clock() {
        let value = timed(2025, 3, 1, 9, 5, 0, 0);
        let serialized = to_iso_string(&value);
        assert!(serialized.starts_with("2025-03-01T09:05:00.000"));
        let offset = &serialized["2025-03-01T09:05:00.000".len()..];
        assert_eq!(offset.len(), 6);
        assert!(offset.starts_with('+') || offset.starts_with('-'));
    }

    /// A zone at -03:00 that jumps to -02:00 at local midnight on 2025-11-02.
    #[derive(Debug, Clone, Copy)]
    struct GapZone;

    impl GapZone {
        fn standard() -> FixedOffset {
            FixedOffset::west_opt(3 * 3_600).expect("valid offset")
        }

        fn daylight() -> FixedOffset {
            FixedOffset::west_opt(2 * 3_600).expect("valid offset")
        }

        fn switch_day() -> NaiveDate {
            NaiveDate::from_ymd_opt(2025, 11, 2).expect("valid date")
        }
    }

    impl TimeZone for GapZone {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            GapZone
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            if *local < Self::switch_day() {
                LocalResult::Single(Self::standard())
            } else {
                LocalResult::Single(Self::daylight())
            }
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            let gap_start = Self::switch_day().and_time(NaiveTime::MIN);
            let gap_end = Self::switch_day()
                .and_hms_opt(1, 0, 0)
                .expect("valid time");
            if *local < gap_start {
                LocalResult::Single(Self::standard())
            } else if *local < gap_end {
                LocalResult::None
            } else {
                LocalResult::Single(Self::daylight())
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            self.offset_from_utc_datetime(&utc.and_time(NaiveTime::MIN))
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            let switch = Self::switch_day()
                .and_hms_opt(3, 0, 0)
                .expect("valid time");
            if *utc < switch {
                Self::standard()
            } else {
                Self::daylight()
            }
        }
    }

    #[test]
    fn test_iso_string_carries_zone_offset() {
        let before = timed(2025, 11, 1, 9, 0, 0, 0).naive();
        let after = timed(2025, 11, 2, 9, 0, 0, 0).naive();
        assert_eq!(iso_string_in(&GapZone, &before), "2025-11-01T09:00:00.000-03:00");
        assert_eq!(iso_string_in(&GapZone, &after), "2025-11-02T09:00:00.000-02:00");
    }

    #[test]
    fn test_iso_string_moves_gap_time_forward() {
        let skipped = timed(2025, 11, 2, 0, 30, 0, 0).naive();
        let written = iso_string_in(&GapZone, &skipped);
        assert_eq!(written, "2025-11-02T01:30:00.000-02:00");

        let read_back = DateTime::parse_from_rfc3339(&written)
            .expect("written instant parses")
            .with_timezone(&GapZone)
            .naive_local();
        assert_eq!(read_back, timed(2025, 11, 2, 1, 30, 0, 0).naive());
        assert_eq!(iso_string_in(&GapZone, &read_back), written);
    }

    #[test]
    fn test_iso_string_is_stable_after_reading_back() {
        let samples = [
            timed(2025, 1, 1, 0, 0, 0, 0),
            timed(2025, 6, 30, 12, 45, 10, 250),
            timed(2025, 10, 19, 0, 30, 0, 0),
            timed(2025, 11, 2, 0, 30, 0, 0),
        ];
        for sample in samples {
            let written = to_iso_string(&sample);
            let parsed = parse_to_calendar_date(Some(&written)).expect("written instant parses");
            assert_eq!(to_iso_string(&parsed), written);
        }
    }

    #[test]
    fn test_string_formats() {
        let value = timed(2025, 3, 5, 7, 8, 9, 0);
        assert_eq!(to_date_string(&value), "2025-03-05");
        assert_eq!(to_date_time_string(&value), "2025-03-05T07:08:09");
        assert_eq!(format_display_date(&value), "05/03/2025");
        assert_eq!(format_display_date_time(&value), "05/03/2025 07:08");
        assert_eq!(format_time_of_day(&value), "07:08");
    }
}
