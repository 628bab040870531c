//! Trigger text for each picker mode.
use datepicker_foundation::{format_display_date, format_display_date_time, parse_to_calendar_date};

use crate::{locale::PickerLocale, value::RangeValue};

/// The four picker modes, without their values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    /// One calendar day, optionally with a time.
    SingleDay,
    /// One month of one year.
    SingleMonth,
    /// A start and end day.
    DateRange,
    /// A start and end instant.
    Full,
}

impl ModeKind {
    /// Default placeholder of the mode in `locale`.
    pub fn default_placeholder(self, locale: PickerLocale) -> &'static str {
        match self {
            ModeKind::SingleDay => locale.single_day_placeholder(),
            ModeKind::SingleMonth => locale.single_month_placeholder(),
            ModeKind::DateRange => locale.date_range_placeholder(),
            ModeKind::Full => locale.full_range_placeholder(),
        }
    }
}

/// `DD/MM/YYYY`, or `DD/MM/YYYY HH:mm` with `include_time`.
pub fn single_day_text(value: Option<&str>, include_time: bool) -> Option<String> {
    let date = parse_to_calendar_date(value)?;
    Some(if include_time {
        format_display_date_time(&date)
    } else {
        format_display_date(&date)
    })
}

/// Localized month name followed by the year, e.g. `Março 2025`.
pub fn single_month_text(value: Option<&str>, locale: PickerLocale) -> Option<String> {
    let date = parse_to_calendar_date(value)?;
    Some(locale.month_year(date.month(), date.year()))
}

/// `DD/MM/YYYY - DD/MM/YYYY`.
pub fn date_range_text(value: Option<&RangeValue>) -> Option<String> {
    let (start, end) = value?.parse()?;
    Some(format!(
        "{} - {}",
        format_display_date(&start),
        format_display_date(&end)
    ))
}

/// `DD/MM/YYYY HH:mm - DD/MM/YYYY HH:mm`.
pub fn full_range_text(value: Option<&RangeValue>) -> Option<String> {
    let (start, end) = value?.parse()?;
    Some(format!(
        "{} - {}",
        format_display_date_time(&start),
        format_display_date_time(&end)
    ))
}

/// Falls back to the host placeholder, then to the mode default.
pub fn or_placeholder(
    text: Option<String>,
    placeholder: Option<&str>,
    kind: ModeKind,
    locale: PickerLocale,
) -> String {
    text.unwrap_or_else(|| {
        placeholder
            .map(str::to_owned)
            .unwrap_or_else(|| kind.default_placeholder(locale).to_owned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_day_text() {
        assert_eq!(single_day_text(Some("2025-03-15"), false).as_deref(), Some("15/03/2025"));
        assert_eq!(
            single_day_text(Some("2025-03-15T09:05:00"), true).as_deref(),
            Some("15/03/2025 09:05")
        );
        assert_eq!(single_day_text(Some("not-a-date"), false), None);
        assert_eq!(single_day_text(None, true), None);
    }

    #[test]
    fn test_single_month_text() {
        assert_eq!(
            single_month_text(Some("2025-03-01T00:00:00"), PickerLocale::PtBr).as_deref(),
            Some("Março 2025")
        );
        assert_eq!(
            single_month_text(Some("2025-03-01"), PickerLocale::EnUs).as_deref(),
            Some("March 2025")
        );
    }

    #[test]
    fn test_range_texts() {
        let range = RangeValue::new("2025-03-05", "2025-03-10");
        assert_eq!(date_range_text(Some(&range)).as_deref(), Some("05/03/2025 - 10/03/2025"));
        let full = RangeValue::new("2025-03-01T09:00:00", "2025-03-01T17:30:00");
        assert_eq!(
            full_range_text(Some(&full)).as_deref(),
            Some("01/03/2025 09:00 - 01/03/2025 17:30")
        );
        let broken = RangeValue::new("2025-03-05", "");
        assert_eq!(date_range_text(Some(&broken)), None);
    }

    #[test]
    fn test_placeholder_fallback_order() {
        assert_eq!(
            or_placeholder(None, Some("Quando?"), ModeKind::SingleDay, PickerLocale::PtBr),
            "Quando?"
        );
        assert_eq!(
            or_placeholder(None, None, ModeKind::DateRange, PickerLocale::PtBr),
            "Selecione um período"
        );
        assert_eq!(
            or_placeholder(Some("x".to_string()), Some("y"), ModeKind::Full, PickerLocale::EnUs),
            "x"
        );
    }
}
