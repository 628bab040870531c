//! Time-of-day input editing the hour and minute of a date.
//!
//! ## Usage
//!
//! Pair with a calendar when the value carries a time. The date portion of
//! the edited value is never changed.
use datepicker_foundation::{CalendarDate, format_time_of_day};
use derive_setters::Setters;

/// How seconds and milliseconds are filled after an hour/minute edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeBoundary {
    /// Seconds and milliseconds reset to zero.
    #[default]
    Start,
    /// Seconds and milliseconds set to 59 and 999, closing a range.
    End,
}

/// Configuration options for [`TimeInput`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct TimeInputArgs {
    /// Fill policy for seconds and milliseconds.
    pub boundary: TimeBoundary,
    /// Step size for hour changes.
    pub hour_step: u32,
    /// Step size for minute changes.
    pub minute_step: u32,
}

impl Default for TimeInputArgs {
    fn default() -> Self {
        Self {
            boundary: TimeBoundary::Start,
            hour_step: 1,
            minute_step: 1,
        }
    }
}

/// Holds the value being edited by a time input.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeInput {
    value: CalendarDate,
    boundary: TimeBoundary,
    hour_step: u32,
    minute_step: u32,
}

impl TimeInput {
    /// Creates a time input editing `value`.
    pub fn new(value: CalendarDate, args: &TimeInputArgs) -> Self {
        Self {
            value,
            boundary: args.boundary,
            hour_step: normalize_step(args.hour_step, 23),
            minute_step: normalize_step(args.minute_step, 59),
        }
    }

    /// Returns the current value.
    pub fn value(&self) -> CalendarDate {
        self.value
    }

    /// Returns the current time as `HH:mm`.
    pub fn text(&self) -> String {
        format_time_of_day(&self.value)
    }

    /// Returns the fill policy.
    pub fn boundary(&self) -> TimeBoundary {
        self.boundary
    }

    /// Replaces the date being edited, keeping the policy.
    pub fn set_value(&mut self, value: CalendarDate) {
        self.value = value;
    }

    /// Applies typed text permissively and returns the new value.
    pub fn set_text(&mut self, text: &str) -> CalendarDate {
        let (hour, minute) = parse_time_text(text);
        self.set_time(hour, minute)
    }

    /// Sets hour and minute, clamped into range, and returns the new value.
    pub fn set_time(&mut self, hour: u32, minute: u32) -> CalendarDate {
        self.value = apply_time(self.value, hour, minute, self.boundary);
        self.value
    }

    /// Increments the hour by the configured step, wrapping around.
    pub fn increment_hour(&mut self) -> CalendarDate {
        let hour = (self.value.hour() + self.hour_step) % 24;
        self.set_time(hour, self.value.minute())
    }

    /// Decrements the hour by the configured step, wrapping around.
    pub fn decrement_hour(&mut self) -> CalendarDate {
        let hour = (self.value.hour() as i64 - self.hour_step as i64).rem_euclid(24) as u32;
        self.set_time(hour, self.value.minute())
    }

    /// Increments the minute by the configured step, wrapping around.
    pub fn increment_minute(&mut self) -> CalendarDate {
        let minute = (self.value.minute() + self.minute_step) % 60;
        self.set_time(self.value.hour(), minute)
    }

    /// Decrements the minute by the configured step, wrapping around.
    pub fn decrement_minute(&mut self) -> CalendarDate {
        let minute = (self.value.minute() as i64 - self.minute_step as i64).rem_euclid(60) as u32;
        self.set_time(self.value.hour(), minute)
    }
}

/// Reads `HH:mm` text permissively.
///
/// Fragments that are not numbers read as 0, the hour clamps to 23 and the
/// minute to 59. A bare three or four digit string such as `930` or `1745`
/// is read as hours followed by minutes.
pub fn parse_time_text(text: &str) -> (u32, u32) {
    let text = text.trim();
    if !text.contains(':')
        && (3..=4).contains(&text.len())
        && text.bytes().all(|b| b.is_ascii_digit())
    {
        let (hour, minute) = text.split_at(text.len() - 2);
        return (clamp_hour(read_fragment(hour)), clamp_minute(read_fragment(minute)));
    }
    let mut fragments = text.split(':');
    let hour = fragments.next().map(read_fragment).unwrap_or(0);
    let minute = fragments.next().map(read_fragment).unwrap_or(0);
    (clamp_hour(hour), clamp_minute(minute))
}

/// Returns `date` with the given hour and minute and the boundary's seconds.
pub fn apply_time(
    date: CalendarDate,
    hour: u32,
    minute: u32,
    boundary: TimeBoundary,
) -> CalendarDate {
    let (second, millisecond) = match boundary {
        TimeBoundary::Start => (0, 0),
        TimeBoundary::End => (59, 999),
    };
    date.with_time(clamp_hour(hour), clamp_minute(minute), second, millisecond)
        .unwrap_or(date)
}

fn read_fragment(fragment: &str) -> u32 {
    let digits: String = fragment
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

fn normalize_step(step: u32, max: u32) -> u32 {
    if step == 0 { 1 } else { step.min(max) }
}

fn clamp_hour(hour: u32) -> u32 {
    hour.min(23)
}

fn clamp_minute(minute: u32) -> u32 {
    minute.min(59)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CalendarDate {
        CalendarDate::from_parts(2025, 3, 1, 8, 15, 30, 500).expect("valid test date")
    }

    #[test]
    fn test_parse_time_text_is_permissive() {
        assert_eq!(parse_time_text("09:30"), (9, 30));
        assert_eq!(parse_time_text("9:5"), (9, 5));
        assert_eq!(parse_time_text("ab:30"), (0, 30));
        assert_eq!(parse_time_text("12:xx"), (12, 0));
        assert_eq!(parse_time_text(""), (0, 0));
        assert_eq!(parse_time_text("25:61"), (23, 59));
        assert_eq!(parse_time_text("1745"), (17, 45));
        assert_eq!(parse_time_text("930"), (9, 30));
        assert_eq!(parse_time_text("7"), (7, 0));
        assert_eq!(parse_time_text("99999999999999:10"), (0, 10));
    }

    #[test]
    fn test_time_edit_keeps_date() {
        let mut input = TimeInput::new(sample(), &TimeInputArgs::default());
        let edited = input.set_text("17:30");
        assert!(edited.is_same_day(&sample()));
        assert_eq!((edited.hour(), edited.minute()), (17, 30));
        assert_eq!((edited.second(), edited.millisecond()), (0, 0));
        assert_eq!(input.text(), "17:30");
    }

    #[test]
    fn test_end_boundary_fills_seconds() {
        let args = TimeInputArgs::default().boundary(TimeBoundary::End);
        let mut input = TimeInput::new(sample(), &args);
        let edited = input.set_time(9, 0);
        assert_eq!((edited.second(), edited.millisecond()), (59, 999));
        assert_eq!(input.boundary(), TimeBoundary::End);
    }

    #[test]
    fn test_steppers_wrap() {
        let args = TimeInputArgs::default().minute_step(15);
        let mut input = TimeInput::new(
            CalendarDate::from_parts(2025, 3, 1, 23, 50, 0, 0).expect("valid"),
            &args,
        );
        assert_eq!(input.increment_minute().minute(), 5);
        assert_eq!(input.increment_hour().hour(), 0);
        assert_eq!(input.decrement_hour().hour(), 23);
        assert_eq!(input.decrement_minute().minute(), 50);
        assert!(input.value().is_same_day(&sample()));
    }
}
