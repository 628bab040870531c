//! Serialized range value exchanged with the host.
use datepicker_foundation::{CalendarDate, parse_to_calendar_date};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A start/end pair of serialized dates.
///
/// Date-range pickers carry `YYYY-MM-DD` strings, full-range pickers carry ISO
/// instants. An emitted range always has `start <= end`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RangeValue {
    /// Earliest edge.
    pub start: String,
    /// Latest edge.
    pub end: String,
}

impl RangeValue {
    /// Creates a range from two serialized edges.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Reads both edges; `None` if either one is unreadable.
    pub fn parse(&self) -> Option<(CalendarDate, CalendarDate)> {
        let start = parse_to_calendar_date(Some(&self.start))?;
        let end = parse_to_calendar_date(Some(&self.end))?;
        Some((start, end))
    }
}
