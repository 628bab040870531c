//! Date-range popover: two-phase grid selection plus date text fields.
use datepicker_foundation::{CalendarDate, parse_calendar_date, to_date_string};
use derive_setters::Setters;
use tracing::debug;

use crate::{
    calendar_grid::{CalendarGridLayout, calendar_grid},
    locale::PickerLocale,
    popover::{PickerMsg, Popover, PopoverAction},
    range_selection::{EdgeTimes, RangeSelection, SelectionPhase},
    value::RangeValue,
};

/// Configuration for [`DateRangePopover`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct DateRangeArgs {
    /// Current range as `YYYY-MM-DD` strings.
    #[setters(strip_option)]
    pub value: Option<RangeValue>,
    /// Reference "now", used as the fallback seed and today highlight.
    pub now: CalendarDate,
    /// Language of the labels.
    pub locale: PickerLocale,
}

impl Default for DateRangeArgs {
    fn default() -> Self {
        Self {
            value: None,
            now: CalendarDate::now(),
            locale: PickerLocale::default(),
        }
    }
}

/// What a date-range popover draws.
#[derive(Debug, Clone, PartialEq)]
pub struct DateRangeView {
    /// The calendar month with the range highlighted.
    pub grid: CalendarGridLayout,
    /// Start date field text.
    pub start_text: String,
    /// End date field text.
    pub end_text: String,
    /// Which edge the next click sets.
    pub selecting: SelectionPhase,
    /// Apply button text.
    pub apply_label: &'static str,
    /// Cancel button text.
    pub cancel_label: &'static str,
}

/// Provisional state of a date-range popover.
#[derive(Debug, Clone, PartialEq)]
pub struct DateRangePopover {
    selection: RangeSelection,
    start_text: String,
    end_text: String,
    now: CalendarDate,
    locale: PickerLocale,
}

impl DateRangePopover {
    /// Seeds the popover from the current range, falling back to today.
    pub fn new(args: &DateRangeArgs) -> Self {
        let selection = seed_selection(args.value.as_ref(), args.now, EdgeTimes::DayBounds);
        let mut popover = Self {
            selection,
            start_text: String::new(),
            end_text: String::new(),
            now: args.now,
            locale: args.locale,
        };
        popover.mirror_texts();
        popover
    }

    /// Returns the provisional selection.
    pub fn selection(&self) -> &RangeSelection {
        &self.selection
    }

    fn mirror_texts(&mut self) {
        self.start_text = to_date_string(&self.selection.start());
        self.end_text = to_date_string(&self.selection.end());
    }

    fn edit_start(&mut self, text: String) {
        match parse_calendar_date(&text) {
            Ok(date) => self.selection.set_start(date),
            Err(err) => debug!("ignoring range start text {text:?}: {err}"),
        }
        self.start_text = text;
    }

    fn edit_end(&mut self, text: String) {
        match parse_calendar_date(&text) {
            Ok(date) => self.selection.set_end(date),
            Err(err) => debug!("ignoring range end text {text:?}: {err}"),
        }
        self.end_text = text;
    }

    fn apply(&self) -> PopoverAction<RangeValue> {
        let (start, end) = self.selection.ordered();
        PopoverAction::Commit(RangeValue::new(
            to_date_string(&start.start_of_day()),
            to_date_string(&end.end_of_day()),
        ))
    }
}

impl Popover for DateRangePopover {
    type Value = RangeValue;
    type View = DateRangeView;

    fn update(&mut self, msg: PickerMsg) -> PopoverAction<RangeValue> {
        match msg {
            PickerMsg::ClickDay(day) => {
                if self.selection.click_day(day) {
                    self.mirror_texts();
                }
            }
            PickerMsg::HoverDay(day) => self.selection.hover_day(day),
            PickerMsg::ClearHover => self.selection.clear_hover(),
            PickerMsg::PreviousMonth => self.selection.previous_month(),
            PickerMsg::NextMonth => self.selection.next_month(),
            PickerMsg::SetStartDateText(text) => self.edit_start(text),
            PickerMsg::SetEndDateText(text) => self.edit_end(text),
            PickerMsg::Apply => return self.apply(),
            PickerMsg::Cancel => return PopoverAction::Dismiss,
            _ => {}
        }
        PopoverAction::None
    }

    fn view(&self) -> DateRangeView {
        let args = self.selection.grid_args(self.now).locale(self.locale);
        DateRangeView {
            grid: calendar_grid(&args),
            start_text: self.start_text.clone(),
            end_text: self.end_text.clone(),
            selecting: self.selection.selecting(),
            apply_label: self.locale.apply_label(),
            cancel_label: self.locale.cancel_label(),
        }
    }
}

/// Builds the initial selection of a range popover.
///
/// Both edges fall back to the whole of `now`'s day when either is missing or
/// unreadable.
pub(crate) fn seed_selection(
    value: Option<&RangeValue>,
    now: CalendarDate,
    edge_times: EdgeTimes,
) -> RangeSelection {
    match value.map(|range| (range, range.parse())) {
        Some((_, Some((start, end)))) => match edge_times {
            EdgeTimes::DayBounds => {
                RangeSelection::new(start.start_of_day(), end.end_of_day(), edge_times)
            }
            EdgeTimes::Preserve => RangeSelection::new(start, end, edge_times),
        },
        Some((range, None)) => {
            debug!("range value {range:?} unreadable, seeding with today");
            RangeSelection::today(now, edge_times)
        }
        None => RangeSelection::today(now, edge_times),
    }
}
