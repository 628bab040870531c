//! Headless calendar date-picker components.
//!
//! Every component is a state holder driven by messages plus a view model
//! describing what a renderer draws. The [`DatePicker`] facade is the single
//! entry point: pick a [`DatePickerMode`], forward trigger clicks and
//! [`PickerMsg`] interactions, and receive values through the mode's
//! [`CallbackWith`] handler.
//!
//! # Usage
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use datepicker_components::{
//!     CallbackWith, DatePicker, DatePickerArgs, DatePickerMode, PickerMsg, RangeValue,
//! };
//! use datepicker_foundation::CalendarDate;
//!
//! let emitted = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&emitted);
//! let mut picker = DatePicker::new(
//!     DatePickerArgs::default()
//!         .mode(DatePickerMode::DateRange {
//!             value: None,
//!             on_change: CallbackWith::new(move |range: RangeValue| {
//!                 if let Ok(mut values) = sink.lock() {
//!                     values.push(range);
//!                 }
//!             }),
//!         })
//!         .now(CalendarDate::new(2025, 3, 12).expect("valid date")),
//! );
//!
//! picker.click_trigger();
//! picker.dispatch(PickerMsg::ClickDay(10));
//! picker.dispatch(PickerMsg::ClickDay(5));
//! picker.dispatch(PickerMsg::Apply);
//! assert_eq!(picker.display_text(), "05/03/2025 - 10/03/2025");
//! assert_eq!(emitted.lock().map(|values| values.len()).unwrap_or(0), 1);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod calendar_grid;
pub mod callback;
pub mod date_picker;
pub mod display;
pub mod locale;
pub mod popover;
pub mod range_selection;
pub mod time_input;
pub mod value;

#[cfg(test)]
mod test;

pub use calendar_grid::{
    CalendarGridArgs, CalendarGridLayout, DayCell, DayEmphasis, GridCell, calendar_grid,
};
pub use callback::CallbackWith;
pub use date_picker::{
    DatePicker, DatePickerArgs, DatePickerMode, DatePickerView, DispatchOutcome, PopoverView,
    TriggerView, WidthType,
};
pub use display::ModeKind;
pub use locale::PickerLocale;
pub use popover::{PickerMsg, Popover, PopoverAction};
pub use range_selection::{EdgeTimes, RangeSelection, SelectionPhase};
pub use time_input::{TimeBoundary, TimeInput, TimeInputArgs};
pub use value::RangeValue;
