//! Calendar fields in Spanish.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Translate an English weekday name. Unknown names pass through unchanged.
pub fn translate_weekday(name: &str) -> Cow<'_, str> {
    let spanish = match name {
        "Monday" => "lunes",
        "Tuesday" => "martes",
        "Wednesday" => "miércoles",
        "Thursday" => "jueves",
        "Friday" => "viernes",
        "Saturday" => "sábado",
        "Sunday" => "domingo",
        _ => return Cow::Borrowed(name),
    };
    Cow::Borrowed(spanish)
}

/// Translate an English month name. Unknown names pass through unchanged.
pub fn translate_month(name: &str) -> Cow<'_, str> {
    let spanish = match name {
        "January" => "enero",
        "February" => "febrero",
        "March" => "marzo",
        "April" => "abril",
        "May" => "mayo",
        "June" => "junio",
        "July" => "julio",
        "August" => "agosto",
        "September" => "septiembre",
        "October" => "octubre",
        "November" => "noviembre",
        "December" => "diciembre",
        _ => return Cow::Borrowed(name),
    };
    Cow::Borrowed(spanish)
}

/// The English long form shown next to the Spanish sentence,
/// e.g. "Monday, October 19, 2026".
pub fn english_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Weekday, month, day and year of a date, with names in Spanish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarFields {
    pub weekday: String,
    pub month: String,
    pub day: u32,
    pub year: i32,
}

impl CalendarFields {
    pub fn from_date(date: NaiveDate) -> Self {
        let weekday = date.format("%A").to_string();
        let month = date.format("%B").to_string();
        Self {
            weekday: translate_weekday(&weekday).into_owned(),
            month: translate_month(&month).into_owned(),
            day: date.day(),
            year: date.year(),
        }
    }
}

impl From<NaiveDate> for CalendarFields {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}
