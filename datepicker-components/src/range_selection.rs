//! Two-phase range selection shared by the range popovers.
//!
//! A click in [`SelectionPhase::Start`] begins a new range on that day and
//! moves to [`SelectionPhase::End`]. The next click closes the range, puts
//! the edges in order and returns to `Start`.
use datepicker_foundation::CalendarDate;
use tracing::trace;

use crate::calendar_grid::{self, CalendarGridArgs};

/// Which edge the next day click sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPhase {
    /// The next click starts a new range.
    #[default]
    Start,
    /// The next click closes the range.
    End,
}

/// How edge times are treated when a day is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeTimes {
    /// Start snaps to start-of-day and end to end-of-day.
    DayBounds,
    /// Each edge keeps its own time of day.
    Preserve,
}

/// Provisional range owned by a mounted popover.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSelection {
    temp_start: CalendarDate,
    temp_end: CalendarDate,
    selecting: SelectionPhase,
    hover_date: Option<CalendarDate>,
    view_date: CalendarDate,
    edge_times: EdgeTimes,
}

impl RangeSelection {
    /// Creates a selection seeded with the given edges.
    ///
    /// Edges are put in order and the view shows the start's month.
    pub fn new(start: CalendarDate, end: CalendarDate, edge_times: EdgeTimes) -> Self {
        let mut selection = Self {
            temp_start: start,
            temp_end: end,
            selecting: SelectionPhase::Start,
            hover_date: None,
            view_date: start,
            edge_times,
        };
        selection.normalize();
        selection.view_date = selection.temp_start;
        selection
    }

    /// Creates a selection covering the whole of `today`.
    pub fn today(today: CalendarDate, edge_times: EdgeTimes) -> Self {
        Self::new(today.start_of_day(), today.end_of_day(), edge_times)
    }

    /// Returns the provisional start.
    pub fn start(&self) -> CalendarDate {
        self.temp_start
    }

    /// Returns the provisional end.
    pub fn end(&self) -> CalendarDate {
        self.temp_end
    }

    /// Returns which edge the next click sets.
    pub fn selecting(&self) -> SelectionPhase {
        self.selecting
    }

    /// Returns the hovered day, kept only while selecting the end.
    pub fn hover_date(&self) -> Option<CalendarDate> {
        self.hover_date
    }

    /// Returns a date inside the displayed month.
    pub fn view_date(&self) -> CalendarDate {
        self.view_date
    }

    /// Returns both edges, earliest first.
    pub fn ordered(&self) -> (CalendarDate, CalendarDate) {
        if self.temp_end.is_before(&self.temp_start) {
            (self.temp_end, self.temp_start)
        } else {
            (self.temp_start, self.temp_end)
        }
    }

    /// Applies a click on `day` of the displayed month.
    ///
    /// Returns false when the month has no such day.
    pub fn click_day(&mut self, day: u32) -> bool {
        let Some(clicked) = self.view_date.with_day(day) else {
            return false;
        };
        match self.selecting {
            SelectionPhase::Start => {
                self.temp_start = self.start_edge(clicked, self.temp_start);
                self.temp_end = self.end_edge(clicked, self.temp_end);
                self.selecting = SelectionPhase::End;
            }
            SelectionPhase::End => {
                self.temp_end = self.end_edge(clicked, self.temp_end);
                self.normalize();
                self.selecting = SelectionPhase::Start;
            }
        }
        self.hover_date = None;
        trace!(
            "range click on day {day}: {:?}..{:?}, next {:?}",
            self.temp_start, self.temp_end, self.selecting
        );
        true
    }

    /// Records the hovered day for preview; ignored unless selecting the end.
    pub fn hover_day(&mut self, day: u32) {
        if self.selecting != SelectionPhase::End {
            self.hover_date = None;
            return;
        }
        self.hover_date = self.view_date.with_day(day).map(|date| date.start_of_day());
    }

    /// Drops the hover preview.
    pub fn clear_hover(&mut self) {
        self.hover_date = None;
    }

    /// Shows the previous month.
    pub fn previous_month(&mut self) {
        self.view_date = calendar_grid::previous_month(self.view_date);
    }

    /// Shows the next month.
    pub fn next_month(&mut self) {
        self.view_date = calendar_grid::next_month(self.view_date);
    }

    /// Replaces the start edge and shows its month.
    pub fn set_start(&mut self, start: CalendarDate) {
        self.temp_start = match self.edge_times {
            EdgeTimes::DayBounds => start.start_of_day(),
            EdgeTimes::Preserve => start,
        };
        self.view_date = self.temp_start;
    }

    /// Replaces the end edge and shows its month.
    pub fn set_end(&mut self, end: CalendarDate) {
        self.temp_end = match self.edge_times {
            EdgeTimes::DayBounds => end.end_of_day(),
            EdgeTimes::Preserve => end,
        };
        self.view_date = self.temp_end;
    }

    /// Grid args highlighting this selection.
    pub fn grid_args(&self, today: CalendarDate) -> CalendarGridArgs {
        let mut args = CalendarGridArgs::new(self.view_date, today)
            .is_range_mode(true)
            .range_start(self.temp_start)
            .range_end(self.temp_end)
            .selecting(self.selecting);
        args.hover_date = self.hover_date;
        args
    }

    fn start_edge(&self, day: CalendarDate, current: CalendarDate) -> CalendarDate {
        match self.edge_times {
            EdgeTimes::DayBounds => day.start_of_day(),
            EdgeTimes::Preserve => current.with_date_of(&day),
        }
    }

    fn end_edge(&self, day: CalendarDate, current: CalendarDate) -> CalendarDate {
        match self.edge_times {
            EdgeTimes::DayBounds => day.end_of_day(),
            EdgeTimes::Preserve => current.with_date_of(&day),
        }
    }

    fn normalize(&mut self) {
        if !self.temp_end.is_before(&self.temp_start) {
            return;
        }
        match self.edge_times {
            EdgeTimes::DayBounds => {
                let start = self.temp_end.start_of_day();
                let end = self.temp_start.end_of_day();
                self.temp_start = start;
                self.temp_end = end;
            }
            EdgeTimes::Preserve => std::mem::swap(&mut self.temp_start, &mut self.temp_end),
        }
    }
}
