//! Month calendar grid layout.
//!
//! ## Usage
//!
//! Build a [`CalendarGridLayout`] from [`CalendarGridArgs`] every time the
//! owning popover changes. The grid keeps no selection state of its own.
use datepicker_foundation::CalendarDate;
use derive_setters::Setters;

use crate::{locale::PickerLocale, range_selection::SelectionPhase};

/// Number of columns in the grid, one per weekday.
pub const DATE_COLUMNS: usize = 7;

/// Configuration for [`calendar_grid`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct CalendarGridArgs {
    /// Any date inside the month to lay out.
    pub view_date: CalendarDate,
    /// Selected day in single-value modes.
    #[setters(strip_option)]
    pub selected_date: Option<CalendarDate>,
    /// First edge of the range in range mode.
    #[setters(strip_option)]
    pub range_start: Option<CalendarDate>,
    /// Second edge of the range in range mode.
    #[setters(strip_option)]
    pub range_end: Option<CalendarDate>,
    /// Which edge the next click sets.
    pub selecting: SelectionPhase,
    /// Day under the pointer, previewed as the end while selecting it.
    #[setters(strip_option)]
    pub hover_date: Option<CalendarDate>,
    /// Whether range edges and in-range spans are computed.
    pub is_range_mode: bool,
    /// Reference day highlighted as today.
    pub today: CalendarDate,
    /// Disables every day cell.
    pub disabled: bool,
    /// Language of the title and weekday labels.
    pub locale: PickerLocale,
}

impl CalendarGridArgs {
    /// Creates args for the month containing `view_date`.
    pub fn new(view_date: CalendarDate, today: CalendarDate) -> Self {
        Self {
            view_date,
            selected_date: None,
            range_start: None,
            range_end: None,
            selecting: SelectionPhase::Start,
            hover_date: None,
            is_range_mode: false,
            today,
            disabled: false,
            locale: PickerLocale::default(),
        }
    }
}

/// Highlight a day cell is drawn with, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayEmphasis {
    /// Chosen day in single-value modes.
    Selected,
    /// Start or end of the range, including a hovered provisional end.
    RangeEdge,
    /// Inside the range span.
    InRange,
    /// Today's date with no other highlight; drawn as a subtle ring.
    Today,
    /// No highlight.
    Plain,
}

/// One day of the displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// Day of the month.
    pub day: u32,
    /// The day at midnight.
    pub date: CalendarDate,
    /// Matches the selected date.
    pub is_selected: bool,
    /// Matches the range start.
    pub is_range_start: bool,
    /// Matches the range end or the hovered provisional end.
    pub is_range_end: bool,
    /// Lies within the range, edges included.
    pub is_in_range: bool,
    /// Matches the today reference.
    pub is_today: bool,
    /// Cannot be clicked.
    pub is_disabled: bool,
}

impl DayCell {
    /// Returns true for either range edge.
    pub fn is_range_edge(&self) -> bool {
        self.is_range_start || self.is_range_end
    }

    /// Resolves the highlight to draw; edges win over today.
    pub fn emphasis(&self) -> DayEmphasis {
        if self.is_selected {
            DayEmphasis::Selected
        } else if self.is_range_edge() {
            DayEmphasis::RangeEdge
        } else if self.is_in_range {
            DayEmphasis::InRange
        } else if self.is_today {
            DayEmphasis::Today
        } else {
            DayEmphasis::Plain
        }
    }
}

/// A grid slot: leading padding or a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// Padding before the first day of the month.
    Blank,
    /// A day of the month.
    Day(DayCell),
}

/// Laid out month ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarGridLayout {
    /// Localized month name and year.
    pub title: String,
    /// Weekday headers, Sunday first.
    pub weekday_labels: [&'static str; DATE_COLUMNS],
    /// Number of blank cells before day 1.
    pub leading_blanks: usize,
    /// Blank padding followed by one cell per day.
    pub cells: Vec<GridCell>,
}

impl CalendarGridLayout {
    /// Iterates over the grid one week row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(DATE_COLUMNS)
    }

    /// Returns the day cells only.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(|cell| match cell {
            GridCell::Day(day) => Some(day),
            GridCell::Blank => None,
        })
    }

    /// Returns the cell for `day`, if the month has it.
    pub fn day(&self, day: u32) -> Option<&DayCell> {
        self.days().find(|cell| cell.day == day)
    }

    /// Translates a clicked cell index into a day number.
    ///
    /// Blank and disabled cells yield `None`.
    pub fn day_for_cell(&self, index: usize) -> Option<u32> {
        match self.cells.get(index)? {
            GridCell::Day(cell) if !cell.is_disabled => Some(cell.day),
            _ => None,
        }
    }
}

/// # calendar_grid
///
/// Lay out one month as a seven-column grid with selection highlights.
///
/// ## Parameters
///
/// - `args`: the month to show and the selection to highlight; see
///   [`CalendarGridArgs`].
///
/// ## Examples
///
/// ```
/// use datepicker_components::calendar_grid::{CalendarGridArgs, calendar_grid};
/// use datepicker_foundation::CalendarDate;
///
/// let march = CalendarDate::new(2025, 3, 12).expect("valid date");
/// let layout = calendar_grid(&CalendarGridArgs::new(march, march));
/// // March 1st 2025 is a Saturday.
/// assert_eq!(layout.leading_blanks, 6);
/// assert_eq!(layout.days().count(), 31);
/// assert!(layout.day(12).is_some_and(|cell| cell.is_today));
/// ```
pub fn calendar_grid(args: &CalendarGridArgs) -> CalendarGridLayout {
    let month_start = args.view_date.first_of_month().start_of_day();
    let leading_blanks = month_start.weekday_from_sunday() as usize;
    let days_in_month = month_start.days_in_month();

    let range = if args.is_range_mode {
        effective_range(args)
    } else {
        None
    };

    let mut cells = Vec::with_capacity(leading_blanks + days_in_month as usize);
    cells.extend(std::iter::repeat_n(GridCell::Blank, leading_blanks));
    for date in (1..=days_in_month).filter_map(|day| month_start.with_day(day)) {
        let (is_range_start, is_range_end, is_in_range) = match range {
            Some((start, end)) => {
                let (low, high) = if end.is_before(&start) {
                    (end, start)
                } else {
                    (start, end)
                };
                (
                    date.is_same_day(&start),
                    date.is_same_day(&end),
                    !date.is_before(&low.start_of_day()) && !date.is_after(&high.end_of_day()),
                )
            }
            None => (false, false, false),
        };
        cells.push(GridCell::Day(DayCell {
            day: date.day(),
            date,
            is_selected: args
                .selected_date
                .is_some_and(|selected| selected.is_same_day(&date)),
            is_range_start,
            is_range_end,
            is_in_range,
            is_today: args.today.is_same_day(&date),
            is_disabled: args.disabled,
        }));
    }

    let mut weekday_labels = [""; DATE_COLUMNS];
    for (index, label) in weekday_labels.iter_mut().enumerate() {
        *label = args.locale.weekday_label(index as u32);
    }

    CalendarGridLayout {
        title: args
            .locale
            .month_year(month_start.month(), month_start.year()),
        weekday_labels,
        leading_blanks,
        cells,
    }
}

/// Returns the month before the one containing `view_date`.
pub fn previous_month(view_date: CalendarDate) -> CalendarDate {
    view_date.add_months(-1)
}

/// Returns the month after the one containing `view_date`.
pub fn next_month(view_date: CalendarDate) -> CalendarDate {
    view_date.add_months(1)
}

fn effective_range(args: &CalendarGridArgs) -> Option<(CalendarDate, CalendarDate)> {
    let start = args.range_start?;
    let end = match (args.selecting, args.hover_date) {
        (SelectionPhase::End, Some(hover)) => hover,
        _ => args.range_end.unwrap_or(start),
    };
    Some((start, end))
}
