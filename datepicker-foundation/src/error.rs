//! Error types for reading serialized date values.
use thiserror::Error;

/// Reasons a serialized date value could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    /// The input was empty or only whitespace.
    #[error("date value is empty")]
    Empty,
    /// The `YYYY-MM-DD` prefix is missing or names a day that does not exist.
    #[error("invalid date component `{0}`")]
    InvalidDate(String),
    /// Something other than `T` or a space follows the date.
    #[error("unexpected separator after date in `{0}`")]
    InvalidSeparator(String),
    /// The time component is present but malformed.
    #[error("invalid time component `{0}`")]
    InvalidTime(String),
    /// The trailing UTC offset is malformed.
    #[error("invalid utc offset `{0}`")]
    InvalidOffset(String),
    /// The wall-clock time does not map to a single instant for its offset.
    #[error("ambiguous or nonexistent local time `{0}`")]
    UnmappableTime(String),
}
