use std::sync::Arc;

use datepicker_foundation::{CalendarDate, parse_to_calendar_date, to_date_string, to_iso_string};
use parking_lot::Mutex;

use crate::{
    CallbackWith, DatePicker, DatePickerArgs, DatePickerMode, DispatchOutcome, PickerMsg,
    PopoverView, RangeValue, SelectionPhase,
};

fn march_12() -> CalendarDate {
    CalendarDate::from_parts(2025, 3, 12, 10, 30, 0, 0).expect("valid test date")
}

fn recorder<T: Send + 'static>() -> (CallbackWith<T>, Arc<Mutex<Vec<T>>>) {
    let values = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&values);
    let handler = CallbackWith::new(move |value: T| sink.lock().push(value));
    (handler, values)
}

fn picker(mode: DatePickerMode, now: CalendarDate) -> DatePicker {
    DatePicker::new(DatePickerArgs::default().mode(mode).now(now))
}

fn range_picker(value: Option<RangeValue>) -> (DatePicker, Arc<Mutex<Vec<RangeValue>>>) {
    let (on_change, values) = recorder();
    let picker = picker(DatePickerMode::DateRange { value, on_change }, march_12());
    (picker, values)
}

#[test]
fn single_day_click_emits_once_and_closes() {
    let (on_change, values) = recorder();
    let mut picker = picker(
        DatePickerMode::SingleDay {
            value: None,
            include_time: false,
            on_change,
        },
        CalendarDate::new(2025, 3, 1).expect("valid test date"),
    );
    picker.click_trigger();
    assert_eq!(picker.dispatch(PickerMsg::ClickDay(15)), DispatchOutcome::Committed);
    assert_eq!(*values.lock(), vec!["2025-03-15".to_string()]);
    assert!(!picker.is_open());
    assert_eq!(picker.display_text(), "15/03/2025");
}

#[test]
fn date_range_reverse_clicks_apply_ordered() {
    let (mut picker, values) = range_picker(None);
    picker.click_trigger();
    assert_eq!(picker.dispatch(PickerMsg::ClickDay(10)), DispatchOutcome::Kept);
    assert_eq!(picker.dispatch(PickerMsg::ClickDay(5)), DispatchOutcome::Kept);
    assert!(picker.is_open());
    assert!(values.lock().is_empty());
    assert_eq!(picker.dispatch(PickerMsg::Apply), DispatchOutcome::Committed);
    assert_eq!(*values.lock(), vec![RangeValue::new("2025-03-05", "2025-03-10")]);
    assert_eq!(picker.display_text(), "05/03/2025 - 10/03/2025");
}

#[test]
fn range_phase_cycles_and_third_click_restarts() {
    let (mut picker, _) = range_picker(None);
    picker.click_trigger();
    let phase = |picker: &DatePicker| match picker.view().popover {
        Some(PopoverView::DateRange(view)) => view.selecting,
        other => panic!("expected a date-range popover, got {other:?}"),
    };
    assert_eq!(phase(&picker), SelectionPhase::Start);
    picker.dispatch(PickerMsg::ClickDay(3));
    assert_eq!(phase(&picker), SelectionPhase::End);
    picker.dispatch(PickerMsg::ClickDay(9));
    assert_eq!(phase(&picker), SelectionPhase::Start);
    picker.dispatch(PickerMsg::ClickDay(20));
    assert_eq!(phase(&picker), SelectionPhase::End);
    let Some(PopoverView::DateRange(view)) = picker.view().popover else {
        panic!("popover stays open");
    };
    assert_eq!(view.start_text, "2025-03-20");
    assert_eq!(view.end_text, "2025-03-20");
}

#[test]
fn cancel_keeps_displayed_value() {
    let seeded = RangeValue::new("2025-02-01", "2025-02-07");
    let (mut picker, values) = range_picker(Some(seeded.clone()));
    let before = picker.display_text();
    picker.click_trigger();
    picker.dispatch(PickerMsg::ClickDay(14));
    picker.dispatch(PickerMsg::ClickDay(20));
    assert_eq!(picker.dispatch(PickerMsg::Cancel), DispatchOutcome::Dismissed);
    assert!(values.lock().is_empty());
    assert_eq!(picker.display_text(), before);

    picker.click_trigger();
    let Some(PopoverView::DateRange(view)) = picker.view().popover else {
        panic!("popover reopens");
    };
    assert_eq!(view.start_text, seeded.start);
    assert_eq!(view.end_text, seeded.end);
}

#[test]
fn trigger_click_while_open_discards_selection() {
    let (mut picker, values) = range_picker(None);
    picker.click_trigger();
    picker.dispatch(PickerMsg::ClickDay(1));
    assert!(!picker.click_trigger());
    assert!(values.lock().is_empty());
    assert_eq!(picker.dispatch(PickerMsg::Apply), DispatchOutcome::Ignored);
}

#[test]
fn next_month_navigation_stays_valid() {
    let mut picker = picker(
        DatePickerMode::SingleDay {
            value: Some("2025-01-31".to_string()),
            include_time: false,
            on_change: CallbackWith::default(),
        },
        march_12(),
    );
    picker.open();
    for _ in 0..240 {
        assert_eq!(picker.dispatch(PickerMsg::NextMonth), DispatchOutcome::Kept);
        let Some(PopoverView::SingleDay(view)) = picker.view().popover else {
            panic!("popover stays open");
        };
        assert!((28..=31).contains(&view.grid.days().count()));
    }
    let Some(PopoverView::SingleDay(view)) = picker.view().popover else {
        panic!("popover stays open");
    };
    assert_eq!(view.grid.title, "Janeiro 2045");
}

#[test]
fn full_range_same_day_keeps_minutes() {
    let (on_change, values) = recorder();
    let mut picker = picker(
        DatePickerMode::Full {
            value: None,
            on_change,
        },
        CalendarDate::new(2025, 3, 1).expect("valid test date"),
    );
    picker.click_trigger();
    picker.dispatch(PickerMsg::ClickDay(1));
    picker.dispatch(PickerMsg::ClickDay(1));
    picker.dispatch(PickerMsg::SetStartTimeText("09:00".to_string()));
    picker.dispatch(PickerMsg::SetEndTimeText("17:30".to_string()));
    assert_eq!(picker.dispatch(PickerMsg::Apply), DispatchOutcome::Committed);

    let emitted = values.lock().clone();
    assert_eq!(emitted.len(), 1);
    let (start, end) = emitted[0].parse().expect("emitted range parses");
    assert!(end.is_after(&start));
    assert_eq!((start.hour(), start.minute()), (9, 0));
    assert_eq!((end.hour(), end.minute()), (17, 30));
    assert_eq!(picker.display_text(), "01/03/2025 09:00 - 01/03/2025 17:30");
}

#[test]
fn unreadable_value_shows_placeholder_and_opens() {
    let mut picker = DatePicker::new(
        DatePickerArgs::default()
            .mode(DatePickerMode::SingleDay {
                value: Some("not-a-date".to_string()),
                include_time: false,
                on_change: CallbackWith::default(),
            })
            .placeholder("Escolha uma data")
            .now(march_12()),
    );
    assert_eq!(picker.display_text(), "Escolha uma data");
    assert!(picker.click_trigger());
    let Some(PopoverView::SingleDay(view)) = picker.view().popover else {
        panic!("popover opens");
    };
    assert!(view.grid.day(12).is_some_and(|cell| cell.is_today));
}

#[test]
fn single_day_time_edit_emits_while_open() {
    let (on_change, values) = recorder();
    let mut picker = picker(
        DatePickerMode::SingleDay {
            value: Some("2025-03-12T08:00:00".to_string()),
            include_time: true,
            on_change,
        },
        march_12(),
    );
    picker.open();
    assert_eq!(
        picker.dispatch(PickerMsg::SetTimeText("1915".to_string())),
        DispatchOutcome::Emitted
    );
    assert!(picker.is_open());
    assert_eq!(picker.display_text(), "12/03/2025 19:15");
    assert_eq!(picker.dispatch(PickerMsg::ClickDay(14)), DispatchOutcome::Committed);
    assert_eq!(
        *values.lock(),
        vec![
            "2025-03-12T19:15:00".to_string(),
            "2025-03-14T19:15:00".to_string()
        ]
    );
}

#[test]
fn emitted_values_read_back_and_keep_ordering() {
    let (on_change, values) = recorder();
    let mut picker = picker(
        DatePickerMode::Full {
            value: Some(RangeValue::new("2025-06-20T12:00:00", "2025-06-02T08:00:00")),
            on_change,
        },
        march_12(),
    );
    picker.open();
    picker.dispatch(PickerMsg::Apply);
    let emitted = values.lock().clone();
    let (start, end) = emitted[0].parse().expect("emitted range parses");
    assert!(!end.is_before(&start));
    assert_eq!(to_iso_string(&start), emitted[0].start);
    assert_eq!(parse_to_calendar_date(Some(&emitted[0].end)), Some(end));
    assert_eq!(to_date_string(&start), "2025-06-02");
}

#[test]
fn single_month_year_view_commits_chosen_month() {
    let (on_change, values) = recorder();
    let mut picker = picker(
        DatePickerMode::SingleMonth {
            value: None,
            on_change,
        },
        march_12(),
    );
    picker.open();
    picker.dispatch(PickerMsg::ToggleYearView);
    picker.dispatch(PickerMsg::SelectYear(2027));
    assert_eq!(picker.dispatch(PickerMsg::SelectMonth(9)), DispatchOutcome::Committed);
    let emitted = values.lock().clone();
    let first = parse_to_calendar_date(emitted.first().map(String::as_str))
        .expect("emitted month parses");
    assert_eq!((first.year(), first.month(), first.day()), (2027, 9, 1));
    assert_eq!(picker.display_text(), "Setembro 2027");
}

#[test]
fn any_two_clicks_apply_an_ordered_range() {
    let march_1 = CalendarDate::new(2025, 3, 1).expect("valid test date");
    for full in [false, true] {
        for first in 1..=31 {
            for second in 1..=31 {
                let (on_change, values) = recorder();
                let mode = if full {
                    DatePickerMode::Full {
                        value: None,
                        on_change,
                    }
                } else {
                    DatePickerMode::DateRange {
                        value: None,
                        on_change,
                    }
                };
                let mut picker = picker(mode, march_1);
                picker.click_trigger();
                picker.dispatch(PickerMsg::ClickDay(first));
                picker.dispatch(PickerMsg::ClickDay(second));
                assert_eq!(picker.dispatch(PickerMsg::Apply), DispatchOutcome::Committed);

                let emitted = values.lock().clone();
                assert_eq!(emitted.len(), 1);
                let (start, end) = emitted[0].parse().expect("emitted range parses");
                assert!(!end.is_before(&start), "{first} then {second}: {:?}", emitted[0]);
                assert_eq!(start.day(), first.min(second));
                assert_eq!(end.day(), first.max(second));
            }
        }
    }
}
