//! Full-range popover: a date range where each edge also carries a time.
use datepicker_foundation::{
    CalendarDate, local_timezone_label, parse_calendar_date, to_date_string, to_iso_string,
};
use derive_setters::Setters;
use tracing::debug;

use crate::{
    calendar_grid::{CalendarGridLayout, calendar_grid},
    locale::PickerLocale,
    popover::{PickerMsg, Popover, PopoverAction, date_range::seed_selection},
    range_selection::{EdgeTimes, RangeSelection, SelectionPhase},
    time_input::{TimeBoundary, TimeInput, TimeInputArgs},
    value::RangeValue,
};

/// Configuration for [`FullRangePopover`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct FullRangeArgs {
    /// Current range as ISO instants.
    #[setters(strip_option)]
    pub value: Option<RangeValue>,
    /// Reference "now", used as the fallback seed and today highlight.
    pub now: CalendarDate,
    /// Language of the labels.
    pub locale: PickerLocale,
}

impl Default for FullRangeArgs {
    fn default() -> Self {
        Self {
            value: None,
            now: CalendarDate::now(),
            locale: PickerLocale::default(),
        }
    }
}

/// Text of one edge's date and time fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeFields {
    /// Date field text, `YYYY-MM-DD` unless the user typed something else.
    pub date_text: String,
    /// Time field text, `HH:mm`.
    pub time_text: String,
}

/// What a full-range popover draws.
#[derive(Debug, Clone, PartialEq)]
pub struct FullRangeView {
    /// The calendar month with the range highlighted.
    pub grid: CalendarGridLayout,
    /// Start edge fields.
    pub start: EdgeFields,
    /// End edge fields.
    pub end: EdgeFields,
    /// Which edge the next click sets.
    pub selecting: SelectionPhase,
    /// Hint naming the timezone the times are read in.
    pub timezone_hint: String,
    /// Apply button text.
    pub apply_label: &'static str,
    /// Cancel button text.
    pub cancel_label: &'static str,
}

/// Provisional state of a full-range popover.
#[derive(Debug, Clone, PartialEq)]
pub struct FullRangePopover {
    selection: RangeSelection,
    start_date_text: String,
    end_date_text: String,
    start_time: TimeInput,
    end_time: TimeInput,
    timezone_label: String,
    now: CalendarDate,
    locale: PickerLocale,
}

impl FullRangePopover {
    /// Seeds the popover from the current range, falling back to today.
    pub fn new(args: &FullRangeArgs) -> Self {
        let selection = seed_selection(args.value.as_ref(), args.now, EdgeTimes::Preserve);
        let start_time = TimeInput::new(selection.start(), &TimeInputArgs::default());
        let end_time = TimeInput::new(
            selection.end(),
            &TimeInputArgs::default().boundary(TimeBoundary::End),
        );
        let mut popover = Self {
            selection,
            start_date_text: String::new(),
            end_date_text: String::new(),
            start_time,
            end_time,
            timezone_label: local_timezone_label(),
            now: args.now,
            locale: args.locale,
        };
        popover.mirror_dates();
        popover
    }

    /// Returns the provisional selection.
    pub fn selection(&self) -> &RangeSelection {
        &self.selection
    }

    fn mirror_dates(&mut self) {
        self.start_date_text = to_date_string(&self.selection.start());
        self.end_date_text = to_date_string(&self.selection.end());
        self.sync_times();
    }

    fn sync_times(&mut self) {
        self.start_time.set_value(self.selection.start());
        self.end_time.set_value(self.selection.end());
    }

    fn edit_start_date(&mut self, text: String) {
        match parse_calendar_date(&text) {
            Ok(date) => {
                let start = self.selection.start().with_date_of(&date);
                self.selection.set_start(start);
                self.sync_times();
            }
            Err(err) => debug!("ignoring range start date {text:?}: {err}"),
        }
        self.start_date_text = text;
    }

    fn edit_end_date(&mut self, text: String) {
        match parse_calendar_date(&text) {
            Ok(date) => {
                let end = self.selection.end().with_date_of(&date);
                self.selection.set_end(end);
                self.sync_times();
            }
            Err(err) => debug!("ignoring range end date {text:?}: {err}"),
        }
        self.end_date_text = text;
    }

    fn edit_start_time(&mut self, text: &str) {
        self.start_time.set_value(self.selection.start());
        let start = self.start_time.set_text(text);
        self.selection.set_start(start);
    }

    fn edit_end_time(&mut self, text: &str) {
        self.end_time.set_value(self.selection.end());
        let end = self.end_time.set_text(text);
        self.selection.set_end(end);
    }

    fn apply(&self) -> PopoverAction<RangeValue> {
        let (start, end) = self.selection.ordered();
        PopoverAction::Commit(RangeValue::new(to_iso_string(&start), to_iso_string(&end)))
    }
}

impl Popover for FullRangePopover {
    type Value = RangeValue;
    type View = FullRangeView;

    fn update(&mut self, msg: PickerMsg) -> PopoverAction<RangeValue> {
        match msg {
            PickerMsg::ClickDay(day) => {
                if self.selection.click_day(day) {
                    self.mirror_dates();
                }
            }
            PickerMsg::HoverDay(day) => self.selection.hover_day(day),
            PickerMsg::ClearHover => self.selection.clear_hover(),
            PickerMsg::PreviousMonth => self.selection.previous_month(),
            PickerMsg::NextMonth => self.selection.next_month(),
            PickerMsg::SetStartDateText(text) => self.edit_start_date(text),
            PickerMsg::SetEndDateText(text) => self.edit_end_date(text),
            PickerMsg::SetStartTimeText(text) => self.edit_start_time(&text),
            PickerMsg::SetEndTimeText(text) => self.edit_end_time(&text),
            PickerMsg::Apply => return self.apply(),
            PickerMsg::Cancel => return PopoverAction::Dismiss,
            _ => {}
        }
        PopoverAction::None
    }

    fn view(&self) -> FullRangeView {
        let args = self.selection.grid_args(self.now).locale(self.locale);
        FullRangeView {
            grid: calendar_grid(&args),
            start: EdgeFields {
                date_text: self.start_date_text.clone(),
                time_text: self.start_time.text(),
            },
            end: EdgeFields {
                date_text: self.end_date_text.clone(),
                time_text: self.end_time.text(),
            },
            selecting: self.selection.selecting(),
            timezone_hint: format!(
                "{}: {}",
                self.locale.timezone_hint_prefix(),
                self.timezone_label
            ),
            apply_label: self.locale.apply_label(),
            cancel_label: self.locale.cancel_label(),
        }
    }
}
