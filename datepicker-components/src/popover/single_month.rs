//! Single-month popover with a month grid and a year selector.
use datepicker_foundation::{CalendarDate, parse_to_calendar_date, to_iso_string};
use derive_setters::Setters;
use tracing::debug;

use crate::{
    locale::PickerLocale,
    popover::{PickerMsg, Popover, PopoverAction},
};

/// Columns of the month and year grids.
pub const MONTH_COLUMNS: usize = 3;
/// Years shown per page of the year selector.
pub const YEARS_PER_PAGE: i32 = 12;

/// Configuration for [`SingleMonthPopover`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct SingleMonthArgs {
    /// Current serialized value: any instant inside the chosen month.
    #[setters(strip_option, into)]
    pub value: Option<String>,
    /// Reference "now", used as the fallback seed and current-month marker.
    pub now: CalendarDate,
    /// Language of the labels.
    pub locale: PickerLocale,
}

impl Default for SingleMonthArgs {
    fn default() -> Self {
        Self {
            value: None,
            now: CalendarDate::now(),
            locale: PickerLocale::default(),
        }
    }
}

/// Which sub-view the month popover shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthPickerView {
    /// Twelve month abbreviations of the pinned year.
    Months,
    /// A page of years.
    Years,
}

/// A month button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCell {
    /// Month number (1-12).
    pub month: u32,
    /// Abbreviated month name.
    pub label: &'static str,
    /// Matches the current value.
    pub is_selected: bool,
    /// Matches the reference now.
    pub is_current: bool,
}

/// A year button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCell {
    /// The year.
    pub year: i32,
    /// Matches the year pinned in the month view.
    pub is_selected: bool,
    /// Matches the reference now.
    pub is_current: bool,
}

/// What a single-month popover draws.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleMonthView {
    /// Active sub-view.
    pub mode: MonthPickerView,
    /// Header text: the pinned year, or the span of the year page.
    pub header: String,
    /// Month buttons, filled in the months view.
    pub months: Vec<MonthCell>,
    /// Year buttons, filled in the years view.
    pub years: Vec<YearCell>,
}

impl SingleMonthView {
    /// Iterates over month buttons one grid row at a time.
    pub fn month_rows(&self) -> impl Iterator<Item = &[MonthCell]> {
        self.months.chunks(MONTH_COLUMNS)
    }

    /// Iterates over year buttons one grid row at a time.
    pub fn year_rows(&self) -> impl Iterator<Item = &[YearCell]> {
        self.years.chunks(MONTH_COLUMNS)
    }
}

/// Provisional state of a single-month popover.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleMonthPopover {
    selected: Option<(i32, u32)>,
    view_year: i32,
    page_start: i32,
    mode: MonthPickerView,
    now: CalendarDate,
    locale: PickerLocale,
}

impl SingleMonthPopover {
    /// Seeds the popover from the current value, falling back to now.
    pub fn new(args: &SingleMonthArgs) -> Self {
        let parsed = parse_to_calendar_date(args.value.as_deref());
        if parsed.is_none() && args.value.is_some() {
            debug!("single-month value {:?} unreadable, seeding with now", args.value);
        }
        let seed = parsed.unwrap_or(args.now);
        Self {
            selected: parsed.map(|date| (date.year(), date.month())),
            view_year: seed.year(),
            page_start: page_start(seed.year()),
            mode: MonthPickerView::Months,
            now: args.now,
            locale: args.locale,
        }
    }

    /// Returns the year pinned in the months view.
    pub fn view_year(&self) -> i32 {
        self.view_year
    }

    /// Returns the active sub-view.
    pub fn mode(&self) -> MonthPickerView {
        self.mode
    }

    fn select_month(&self, month: u32) -> PopoverAction<String> {
        match CalendarDate::new(self.view_year, month, 1) {
            Some(first_instant) => PopoverAction::Commit(to_iso_string(&first_instant)),
            None => PopoverAction::None,
        }
    }

    fn step(&mut self, direction: i32) {
        match self.mode {
            MonthPickerView::Months => {
                self.view_year = self.view_year.saturating_add(direction);
                self.page_start = page_start(self.view_year);
            }
            MonthPickerView::Years => {
                self.page_start = self.page_start.saturating_add(direction * YEARS_PER_PAGE);
            }
        }
    }
}

impl Popover for SingleMonthPopover {
    type Value = String;
    type View = SingleMonthView;

    fn update(&mut self, msg: PickerMsg) -> PopoverAction<String> {
        match msg {
            PickerMsg::ToggleYearView => {
                self.mode = match self.mode {
                    MonthPickerView::Months => {
                        self.page_start = page_start(self.view_year);
                        MonthPickerView::Years
                    }
                    MonthPickerView::Years => MonthPickerView::Months,
                };
                PopoverAction::None
            }
            PickerMsg::PreviousYear => {
                self.step(-1);
                PopoverAction::None
            }
            PickerMsg::NextYear => {
                self.step(1);
                PopoverAction::None
            }
            PickerMsg::SelectYear(year) => {
                self.view_year = year;
                self.page_start = page_start(year);
                self.mode = MonthPickerView::Months;
                PopoverAction::None
            }
            PickerMsg::SelectMonth(month) if self.mode == MonthPickerView::Months => {
                self.select_month(month)
            }
            PickerMsg::Cancel => PopoverAction::Dismiss,
            _ => PopoverAction::None,
        }
    }

    fn view(&self) -> SingleMonthView {
        match self.mode {
            MonthPickerView::Months => SingleMonthView {
                mode: self.mode,
                header: self.view_year.to_string(),
                months: (1..=12)
                    .map(|month| MonthCell {
                        month,
                        label: self.locale.month_abbreviation(month),
                        is_selected: self.selected == Some((self.view_year, month)),
                        is_current: self.now.year() == self.view_year
                            && self.now.month() == month,
                    })
                    .collect(),
                years: Vec::new(),
            },
            MonthPickerView::Years => {
                let last = self.page_start.saturating_add(YEARS_PER_PAGE - 1);
                SingleMonthView {
                    mode: self.mode,
                    header: format!("{} - {last}", self.page_start),
                    months: Vec::new(),
                    years: (self.page_start..=last)
                        .map(|year| YearCell {
                            year,
                            is_selected: year == self.view_year,
                            is_current: year == self.now.year(),
                        })
                        .collect(),
                }
            }
        }
    }
}

fn page_start(year: i32) -> i32 {
    year.div_euclid(YEARS_PER_PAGE) * YEARS_PER_PAGE
}

#[cfg(test)]
mod tests {
    use datepicker_foundation::parse_to_calendar_date;

    use super::*;

    fn args() -> SingleMonthArgs {
        SingleMonthArgs::default()
            .now(CalendarDate::new(2025, 3, 10).expect("valid date"))
            .locale(PickerLocale::EnUs)
    }

    fn committed_date(action: PopoverAction<String>) -> CalendarDate {
        match action {
            PopoverAction::Commit(value) => {
                parse_to_calendar_date(Some(&value)).expect("emitted value parses")
            }
            other => panic!("expected a commit, got {other:?}"),
        }
    }

    #[test]
    fn test_select_month_commits_first_instant() {
        let mut popover = SingleMonthPopover::new(&args());
        let date = committed_date(popover.update(PickerMsg::SelectMonth(7)));
        assert_eq!(date, CalendarDate::new(2025, 7, 1).expect("valid date"));
    }

    #[test]
    fn test_month_grid_layout() {
        let popover = SingleMonthPopover::new(&args().value("2024-11-05"));
        let view = popover.view();
        assert_eq!(view.header, "2024");
        assert_eq!(view.months.len(), 12);
        assert_eq!(view.month_rows().count(), 4);
        assert!(view.month_rows().all(|row| row.len() == MONTH_COLUMNS));
        let selected: Vec<u32> = view
            .months
            .iter()
            .filter(|cell| cell.is_selected)
            .map(|cell| cell.month)
            .collect();
        assert_eq!(selected, vec![11]);
        assert!(view.months.iter().all(|cell| !cell.is_current));
        assert_eq!(view.months[0].label, "Jan");
    }

    #[test]
    fn test_year_view_round_trip() {
        let mut popover = SingleMonthPopover::new(&args());
        popover.update(PickerMsg::ToggleYearView);
        assert_eq!(popover.mode(), MonthPickerView::Years);
        let view = popover.view();
        assert_eq!(view.years.len(), YEARS_PER_PAGE as usize);
        assert!(view.years.iter().any(|cell| cell.year == 2025 && cell.is_current));
        assert_eq!(popover.update(PickerMsg::SelectMonth(3)), PopoverAction::None);

        popover.update(PickerMsg::NextYear);
        let next_page = popover.view();
        assert_eq!(next_page.years[0].year, view.years[0].year + YEARS_PER_PAGE);

        popover.update(PickerMsg::SelectYear(2031));
        assert_eq!(popover.mode(), MonthPickerView::Months);
        assert_eq!(popover.view_year(), 2031);
        let date = committed_date(popover.update(PickerMsg::SelectMonth(2)));
        assert_eq!((date.year(), date.month(), date.day()), (2031, 2, 1));
    }

    #[test]
    fn test_arrows_step_years_in_month_view() {
        let mut popover = SingleMonthPopover::new(&args());
        popover.update(PickerMsg::PreviousYear);
        popover.update(PickerMsg::PreviousYear);
        assert_eq!(popover.view_year(), 2023);
        assert_eq!(popover.view().header, "2023");
    }

    #[test]
    fn test_invalid_month_and_seed_are_ignored() {
        let mut popover = SingleMonthPopover::new(&args().value("garbage"));
        assert_eq!(popover.view_year(), 2025);
        assert!(popover.view().months.iter().all(|cell| !cell.is_selected));
        assert_eq!(popover.update(PickerMsg::SelectMonth(13)), PopoverAction::None);
        assert_eq!(popover.update(PickerMsg::Cancel), PopoverAction::Dismiss);
    }
}
