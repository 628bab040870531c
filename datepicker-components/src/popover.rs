//! Mode popovers holding provisional selections.
//!
//! ## Usage
//!
//! A popover is constructed when it opens and dropped when it closes. Feed it
//! [`PickerMsg`] values and act on the returned [`PopoverAction`]: nothing is
//! committed until the popover emits.
pub mod date_range;
pub mod full_range;
pub mod single_day;
pub mod single_month;

/// User interactions a popover can receive.
///
/// Popovers ignore messages that do not apply to their mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerMsg {
    /// A day of the displayed month was clicked.
    ClickDay(u32),
    /// The pointer entered a day of the displayed month.
    HoverDay(u32),
    /// The pointer left the grid.
    ClearHover,
    /// The previous-month button was pressed.
    PreviousMonth,
    /// The next-month button was pressed.
    NextMonth,
    /// The month popover header was clicked.
    ToggleYearView,
    /// The month popover's back arrow was pressed.
    PreviousYear,
    /// The month popover's forward arrow was pressed.
    NextYear,
    /// A year was picked in the year view.
    SelectYear(i32),
    /// A month (1-12) was picked in the month view.
    SelectMonth(u32),
    /// The single-day time field changed.
    SetTimeText(String),
    /// The range start date field changed.
    SetStartDateText(String),
    /// The range end date field changed.
    SetEndDateText(String),
    /// The range start time field changed.
    SetStartTimeText(String),
    /// The range end time field changed.
    SetEndTimeText(String),
    /// The apply button was pressed.
    Apply,
    /// The popover was dismissed without confirming.
    Cancel,
}

/// What the owner of a popover should do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopoverAction<V> {
    /// Keep the popover open; nothing to emit.
    None,
    /// Emit the value and keep the popover open.
    Emit(V),
    /// Emit the value and close the popover.
    Commit(V),
    /// Close the popover, discarding the provisional selection.
    Dismiss,
}

impl<V> PopoverAction<V> {
    /// Returns the value to emit, if any.
    pub fn value(&self) -> Option<&V> {
        match self {
            PopoverAction::Emit(value) | PopoverAction::Commit(value) => Some(value),
            PopoverAction::None | PopoverAction::Dismiss => None,
        }
    }

    /// Returns true when the popover should close.
    pub fn closes(&self) -> bool {
        matches!(self, PopoverAction::Commit(_) | PopoverAction::Dismiss)
    }
}

/// A mode popover driven by [`PickerMsg`].
pub trait Popover {
    /// Serialized value the popover emits.
    type Value: Clone;
    /// View model describing what to draw.
    type View;

    /// Applies one interaction.
    fn update(&mut self, msg: PickerMsg) -> PopoverAction<Self::Value>;

    /// Describes the current state for drawing.
    fn view(&self) -> Self::View;
}
