use console::style;
use datepicker_components::{
    CalendarGridLayout, DayEmphasis, GridCell, PopoverView,
    popover::single_month::{MonthPickerView, SingleMonthView},
};

const STATUS_WIDTH: usize = 12;

pub fn status(label: &str, message: impl AsRef<str>) {
    eprintln!(
        "{:>width$} {}",
        style(label).green().bold(),
        message.as_ref(),
        width = STATUS_WIDTH
    );
}

pub fn note(message: impl AsRef<str>) {
    eprintln!("{}: {}", style("note").blue().bold(), message.as_ref());
}

pub fn step(message: impl AsRef<str>) {
    eprintln!("    {}", message.as_ref());
}

pub fn popover(view: &PopoverView) {
    match view {
        PopoverView::SingleDay(view) => {
            grid(&view.grid);
            if let Some(time) = &view.time_text {
                step(format!("time  {time}"));
            }
        }
        PopoverView::SingleMonth(view) => month_grid(view),
        PopoverView::DateRange(view) => {
            grid(&view.grid);
            step(format!("from  {}", view.start_text));
            step(format!("to    {}", view.end_text));
            step(format!("next  {:?}", view.selecting));
        }
        PopoverView::Full(view) => {
            grid(&view.grid);
            step(format!("from  {} {}", view.start.date_text, view.start.time_text));
            step(format!("to    {} {}", view.end.date_text, view.end.time_text));
            step(format!("next  {:?}", view.selecting));
            step(style(&view.timezone_hint).dim().to_string());
        }
    }
}

fn grid(layout: &CalendarGridLayout) {
    step(style(&layout.title).bold().to_string());
    step(
        layout
            .weekday_labels
            .iter()
            .map(|label| format!("{label:>4}"))
            .collect::<String>(),
    );
    for row in layout.rows() {
        let line: String = row
            .iter()
            .map(|cell| match cell {
                GridCell::Blank => "    ".to_string(),
                GridCell::Day(day) => {
                    let text = format!("{:>4}", day.day);
                    match day.emphasis() {
                        DayEmphasis::Selected | DayEmphasis::RangeEdge => {
                            style(text).reverse().to_string()
                        }
                        DayEmphasis::InRange => style(text).cyan().to_string(),
                        DayEmphasis::Today => style(text).underlined().to_string(),
                        DayEmphasis::Plain => text,
                    }
                }
            })
            .collect();
        step(line);
    }
}

fn month_grid(view: &SingleMonthView) {
    step(style(&view.header).bold().to_string());
    match view.mode {
        MonthPickerView::Months => {
            for row in view.month_rows() {
                let line: String = row
                    .iter()
                    .map(|cell| {
                        let text = format!("{:>6}", cell.label);
                        if cell.is_selected {
                            style(text).reverse().to_string()
                        } else if cell.is_current {
                            style(text).underlined().to_string()
                        } else {
                            text
                        }
                    })
                    .collect();
                step(line);
            }
        }
        MonthPickerView::Years => {
            for row in view.year_rows() {
                let line: String = row
                    .iter()
                    .map(|cell| {
                        let text = format!("{:>6}", cell.year);
                        if cell.is_selected {
                            style(text).reverse().to_string()
                        } else if cell.is_current {
                            style(text).underlined().to_string()
                        } else {
                            text
                        }
                    })
                    .collect();
                step(line);
            }
        }
    }
}
