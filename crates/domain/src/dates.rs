//! Naive calendar-date display helpers (pt-BR)
//!
//! Event dates arrive as bare `YYYY-MM-DD` strings with no time or zone
//! component. Everything here therefore works on [`NaiveDate`] and never
//! builds a timestamp: parsing "2025-06-15" through a UTC-midnight epoch
//! would render June 14th for every user west of Greenwich.
//!
//! "Today" is always an explicit parameter. The library never reads the
//! system clock, which also keeps these functions trivially testable.

use chrono::{Datelike, NaiveDate};

const MONTHS_LONG: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const MONTHS_SHORT: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

const WEEKDAYS: [&str; 7] = [
    "domingo",
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
];

/// How the month is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthStyle {
    /// "junho"
    #[default]
    Long,
    /// "jun"
    Short,
    /// "06" (switches the whole date to DD/MM/YYYY form)
    Numeric,
}

/// How the year is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearStyle {
    /// "2025"
    #[default]
    Full,
    /// "25"
    TwoDigit,
}

/// Formatting options for [`format_calendar_date`]
///
/// The default matches the dashboard's long form: "15 de junho de 2025".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateStyle {
    /// Zero-pad the day to two digits
    pub day_padding: bool,
    pub month: MonthStyle,
    pub year: YearStyle,
    /// Prefix the weekday name ("domingo, 15 de junho de 2025")
    pub with_weekday: bool,
}

impl Default for DateStyle {
    fn default() -> Self {
        Self {
            day_padding: true,
            month: MonthStyle::Long,
            year: YearStyle::Full,
            with_weekday: false,
        }
    }
}

/// Render a calendar date in the requested style
pub fn format_calendar_date(date: NaiveDate, style: &DateStyle) -> String {
    let day = if style.day_padding {
        format!("{:02}", date.day())
    } else {
        date.day().to_string()
    };
    let year = match style.year {
        YearStyle::Full => format!("{:04}", date.year()),
        YearStyle::TwoDigit => format!("{:02}", date.year().rem_euclid(100)),
    };
    let month_index = date.month0() as usize;

    let formatted = match style.month {
        MonthStyle::Long => format!("{day} de {} de {year}", MONTHS_LONG[month_index]),
        MonthStyle::Short => format!("{day} de {} de {year}", MONTHS_SHORT[month_index]),
        MonthStyle::Numeric => format!("{day}/{:02}/{year}", date.month()),
    };

    if style.with_weekday {
        format!("{}, {formatted}", weekday_name(date))
    } else {
        formatted
    }
}

/// "15/06/2025"
pub fn format_date_short(date: NaiveDate) -> String {
    format_calendar_date(
        date,
        &DateStyle {
            month: MonthStyle::Numeric,
            ..DateStyle::default()
        },
    )
}

/// "domingo, 15 de junho de 2025"
pub fn format_date_with_weekday(date: NaiveDate) -> String {
    format_calendar_date(
        date,
        &DateStyle {
            with_weekday: true,
            ..DateStyle::default()
        },
    )
}

/// The pt-BR weekday name for a date
pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_sunday() as usize]
}

/// True iff year, month and day-of-month all match
pub fn is_same_calendar_day(date: NaiveDate, reference: NaiveDate) -> bool {
    date == reference
}

/// Signed whole days from `today` until `date` (negative for past dates)
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

/// Render a date relative to `today`
///
/// "Hoje" for today, "Amanhã" for tomorrow, the weekday name inside the
/// next week (inclusive), and the full long-form date otherwise.
pub fn format_relative_date(date: NaiveDate, today: NaiveDate) -> String {
    if is_same_calendar_day(date, today) {
        return "Hoje".to_string();
    }
    if days_until(date, today) == 1 {
        return "Amanhã".to_string();
    }
    match days_until(date, today) {
        0..=7 => weekday_name(date).to_string(),
        _ => format_calendar_date(date, &DateStyle::default()),
    }
}
