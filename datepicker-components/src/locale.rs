//! Localized labels for picker text.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Languages the picker labels are available in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PickerLocale {
    /// Brazilian Portuguese.
    #[default]
    PtBr,
    /// American English.
    EnUs,
}

const PT_BR_MONTHS: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

const EN_US_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const PT_BR_WEEKDAYS: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];
const EN_US_WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

impl PickerLocale {
    /// Full month name for `month` (1-12).
    pub fn month_name(self, month: u32) -> &'static str {
        let index = month.clamp(1, 12) as usize - 1;
        match self {
            PickerLocale::PtBr => PT_BR_MONTHS[index],
            PickerLocale::EnUs => EN_US_MONTHS[index],
        }
    }

    /// Three-letter month abbreviation for `month` (1-12).
    pub fn month_abbreviation(self, month: u32) -> &'static str {
        let name = self.month_name(month);
        match name.char_indices().nth(3) {
            Some((end, _)) => &name[..end],
            None => name,
        }
    }

    /// Short weekday label, 0 for Sunday.
    pub fn weekday_label(self, weekday_from_sunday: u32) -> &'static str {
        let index = (weekday_from_sunday % 7) as usize;
        match self {
            PickerLocale::PtBr => PT_BR_WEEKDAYS[index],
            PickerLocale::EnUs => EN_US_WEEKDAYS[index],
        }
    }

    /// Month name followed by the year, as shown in headers and triggers.
    pub fn month_year(self, month: u32, year: i32) -> String {
        format!("{} {year}", self.month_name(month))
    }

    /// Label of the confirm action in range popovers.
    pub fn apply_label(self) -> &'static str {
        match self {
            PickerLocale::PtBr => "Aplicar",
            PickerLocale::EnUs => "Apply",
        }
    }

    /// Label of the cancel action in range popovers.
    pub fn cancel_label(self) -> &'static str {
        match self {
            PickerLocale::PtBr => "Cancelar",
            PickerLocale::EnUs => "Cancel",
        }
    }

    /// Prefix placed before the timezone hint.
    pub fn timezone_hint_prefix(self) -> &'static str {
        match self {
            PickerLocale::PtBr => "Fuso horário",
            PickerLocale::EnUs => "Timezone",
        }
    }

    pub(crate) fn single_day_placeholder(self) -> &'static str {
        match self {
            PickerLocale::PtBr => "Selecione uma data",
            PickerLocale::EnUs => "Select a date",
        }
    }

    pub(crate) fn single_month_placeholder(self) -> &'static str {
        match self {
            PickerLocale::PtBr => "Selecione um mês",
            PickerLocale::EnUs => "Select a month",
        }
    }

    pub(crate) fn date_range_placeholder(self) -> &'static str {
        match self {
            PickerLocale::PtBr => "Selecione um período",
            PickerLocale::EnUs => "Select a period",
        }
    }

    pub(crate) fn full_range_placeholder(self) -> &'static str {
        match self {
            PickerLocale::PtBr => "Selecione data e hora",
            PickerLocale::EnUs => "Select date and time",
        }
    }
}
