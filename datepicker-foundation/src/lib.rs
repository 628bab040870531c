//! Foundation values for the datepicker components.
//!
//! # Usage
//!
//! ```
//! use datepicker_foundation::{CalendarDate, parse_to_calendar_date, to_date_string};
//!
//! let date = parse_to_calendar_date(Some("2025-03-15")).expect("valid date");
//! assert_eq!(date, CalendarDate::new(2025, 3, 15).expect("valid date"));
//! assert_eq!(to_date_string(&date.add_months(1)), "2025-04-15");
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod calendar_date;
pub mod error;
pub mod serialize;
pub mod timezone;

pub use calendar_date::{CalendarDate, days_in_month, is_leap_year};
pub use error::DateParseError;
pub use serialize::{
    format_display_date, format_display_date_time, format_time_of_day, parse_calendar_date,
    parse_to_calendar_date, to_date_string, to_date_time_string, to_iso_string,
};
pub use timezone::{local_timezone_id, local_timezone_label, timezone_label};
