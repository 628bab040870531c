//! Single-day popover: one click selects and closes.
use datepicker_foundation::{
    CalendarDate, parse_to_calendar_date, to_date_string, to_date_time_string,
};
use derive_setters::Setters;
use tracing::debug;

use crate::{
    calendar_grid::{self, CalendarGridArgs, CalendarGridLayout, calendar_grid},
    locale::PickerLocale,
    popover::{PickerMsg, Popover, PopoverAction},
    time_input::{TimeInput, TimeInputArgs},
};

/// Configuration for [`SingleDayPopover`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct SingleDayArgs {
    /// Current serialized value, `YYYY-MM-DD` or `YYYY-MM-DDTHH:mm:ss`.
    #[setters(strip_option, into)]
    pub value: Option<String>,
    /// Emit date-time strings and show a time input.
    pub include_time: bool,
    /// Reference "now", used as the fallback seed and today highlight.
    pub now: CalendarDate,
    /// Language of the labels.
    pub locale: PickerLocale,
}

impl Default for SingleDayArgs {
    fn default() -> Self {
        Self {
            value: None,
            include_time: false,
            now: CalendarDate::now(),
            locale: PickerLocale::default(),
        }
    }
}

/// What a single-day popover draws.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleDayView {
    /// The calendar month.
    pub grid: CalendarGridLayout,
    /// Time field text, present when the value carries a time.
    pub time_text: Option<String>,
}

/// Provisional state of a single-day popover.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleDayPopover {
    tentative: CalendarDate,
    selected: Option<CalendarDate>,
    view_date: CalendarDate,
    include_time: bool,
    time_input: TimeInput,
    now: CalendarDate,
    locale: PickerLocale,
}

impl SingleDayPopover {
    /// Seeds the popover from the current value, falling back to now.
    pub fn new(args: &SingleDayArgs) -> Self {
        let selected = parse_to_calendar_date(args.value.as_deref());
        if selected.is_none() && args.value.is_some() {
            debug!("single-day value {:?} unreadable, seeding with now", args.value);
        }
        let tentative = selected.unwrap_or(args.now);
        Self {
            tentative,
            selected,
            view_date: tentative,
            include_time: args.include_time,
            time_input: TimeInput::new(tentative, &TimeInputArgs::default()),
            now: args.now,
            locale: args.locale,
        }
    }

    /// Returns the tentative date, including its time of day.
    pub fn tentative(&self) -> CalendarDate {
        self.tentative
    }

    /// Returns a date inside the displayed month.
    pub fn view_date(&self) -> CalendarDate {
        self.view_date
    }

    fn serialize(&self, date: &CalendarDate) -> String {
        if self.include_time {
            to_date_time_string(date)
        } else {
            to_date_string(date)
        }
    }

    fn pick_day(&mut self, day: u32) -> PopoverAction<String> {
        let Some(clicked) = self.view_date.with_day(day) else {
            return PopoverAction::None;
        };
        let picked = if self.include_time {
            self.tentative.with_date_of(&clicked)
        } else {
            clicked.start_of_day()
        };
        self.tentative = picked;
        self.selected = Some(picked);
        self.time_input.set_value(picked);
        PopoverAction::Commit(self.serialize(&picked))
    }

    fn edit_time(&mut self, text: &str) -> PopoverAction<String> {
        if !self.include_time {
            return PopoverAction::None;
        }
        self.time_input.set_value(self.tentative);
        self.tentative = self.time_input.set_text(text);
        self.selected = Some(self.tentative);
        PopoverAction::Emit(self.serialize(&self.tentative))
    }
}

impl Popover for SingleDayPopover {
    type Value = String;
    type View = SingleDayView;

    fn update(&mut self, msg: PickerMsg) -> PopoverAction<String> {
        match msg {
            PickerMsg::ClickDay(day) => self.pick_day(day),
            PickerMsg::SetTimeText(text) => self.edit_time(&text),
            PickerMsg::PreviousMonth => {
                self.view_date = calendar_grid::previous_month(self.view_date);
                PopoverAction::None
            }
            PickerMsg::NextMonth => {
                self.view_date = calendar_grid::next_month(self.view_date);
                PopoverAction::None
            }
            PickerMsg::Cancel => PopoverAction::Dismiss,
            _ => PopoverAction::None,
        }
    }

    fn view(&self) -> SingleDayView {
        let mut args = CalendarGridArgs::new(self.view_date, self.now).locale(self.locale);
        args.selected_date = self.selected;
        SingleDayView {
            grid: calendar_grid(&args),
            time_text: self.include_time.then(|| self.time_input.text()),
        }
    }
}
