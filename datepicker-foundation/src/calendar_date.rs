//! Calendar date values used by every picker mode.
//!
//! ## Usage
//!
//! Build dates with [`CalendarDate::new`] or read the local clock with
//! [`CalendarDate::now`], then derive new values with month arithmetic and
//! start/end-of-day normalization.
use std::fmt;

use chrono::{Datelike, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// A local wall-clock point in time with millisecond precision.
///
/// Months are 1-12. Every value is a valid calendar date; there is no way to
/// construct February 30th.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDateTime);

impl CalendarDate {
    /// Creates a date at midnight if the values are valid.
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(|date| Self(date.and_time(NaiveTime::MIN)))
    }

    /// Creates a date with a time of day if every component is valid.
    pub fn from_parts(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Option<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let time = NaiveTime::from_hms_milli_opt(hour, minute, second, millisecond)?;
        Some(Self(date.and_time(time)))
    }

    /// Wraps a naive local date-time.
    pub fn from_naive(value: NaiveDateTime) -> Self {
        Self(value)
    }

    /// Returns the current local wall-clock time.
    pub fn now() -> Self {
        Self(Local::now().naive_local())
    }

    /// Returns the wrapped naive date-time.
    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day of the month (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the second (0-59).
    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// Returns the millisecond (0-999).
    pub fn millisecond(&self) -> u32 {
        (self.0.nanosecond() / 1_000_000).min(999)
    }

    /// Returns true when `self` is strictly earlier than `other`.
    pub fn is_before(&self, other: &CalendarDate) -> bool {
        self < other
    }

    /// Returns true when `self` is strictly later than `other`.
    pub fn is_after(&self, other: &CalendarDate) -> bool {
        self > other
    }

    /// Returns true when both values fall on the same calendar day.
    pub fn is_same_day(&self, other: &CalendarDate) -> bool {
        self.0.date() == other.0.date()
    }

    /// Shifts the date by `delta` months.
    ///
    /// The day clamps into the target month (January 31st plus one month is
    /// the last day of February). Results outside the representable range
    /// leave the value unchanged.
    pub fn add_months(&self, delta: i32) -> Self {
        let months = Months::new(delta.unsigned_abs());
        let shifted = if delta >= 0 {
            self.0.checked_add_months(months)
        } else {
            self.0.checked_sub_months(months)
        };
        shifted.map(Self).unwrap_or(*self)
    }

    /// Returns the same day at 00:00:00.000.
    pub fn start_of_day(&self) -> Self {
        Self(self.0.date().and_time(NaiveTime::MIN))
    }

    /// Returns the same day at 23:59:59.999.
    pub fn end_of_day(&self) -> Self {
        let end = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
        Self(self.0.date().and_time(end))
    }

    /// Returns the first day of this month, keeping the time of day.
    pub fn first_of_month(&self) -> Self {
        self.with_day(1).unwrap_or(*self)
    }

    /// Moves to another day of the same month, keeping the time of day.
    pub fn with_day(&self, day: u32) -> Option<Self> {
        self.0.with_day(day).map(Self)
    }

    /// Replaces the time of day, keeping the date.
    pub fn with_time(&self, hour: u32, minute: u32, second: u32, millisecond: u32) -> Option<Self> {
        NaiveTime::from_hms_milli_opt(hour, minute, second, millisecond)
            .map(|time| Self(self.0.date().and_time(time)))
    }

    /// Takes the date from `other` and keeps the time of day of `self`.
    pub fn with_date_of(&self, other: &CalendarDate) -> Self {
        Self(other.0.date().and_time(self.0.time()))
    }

    /// Returns the number of days in this month.
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Returns the weekday of this date, 0 for Sunday through 6 for Saturday.
    pub fn weekday_from_sunday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Returns the weekday of the first day of this month, 0 for Sunday.
    pub fn first_weekday_of_month(&self) -> u32 {
        self.first_of_month().weekday_from_sunday()
    }
}

impl fmt::Debug for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CalendarDate({})", self.0.format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

/// Returns the number of days in `month` (1-12) of `year`, or 0 when the
/// month does not exist.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .map_or(0, |last| last.day())
}

/// Returns true for Gregorian leap years.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}
