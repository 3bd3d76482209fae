//! Sentence templates for the date, weather and season statements.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{english_long_date, CalendarFields};
use crate::numerals::spell_signed;
use crate::season::Season;
use crate::token::TokenSequence;

/// "hoy es el lunes cinco de mayo de dos mil veinticinco"
pub fn today_statement(fields: &CalendarFields) -> TokenSequence {
    let mut out: TokenSequence = ["hoy", "es", "el"].into_iter().collect();
    out.push(fields.weekday.clone());
    push_day_month_year(&mut out, fields);
    out
}

/// "La fecha seleccionada es cinco de mayo de dos mil veinticinco"
pub fn selected_date_statement(fields: &CalendarFields) -> TokenSequence {
    let mut out: TokenSequence = ["La", "fecha", "seleccionada", "es"].into_iter().collect();
    push_day_month_year(&mut out, fields);
    out
}

/// "la temperatura es veintidós grados centígrados"
///
/// Returns `None` while no reading is available; callers leave the weather
/// statement out entirely in that case.
pub fn weather_statement(temperature_celsius: Option<f64>) -> Option<TokenSequence> {
    let celsius = temperature_celsius.filter(|t| t.is_finite())?;
    let mut out: TokenSequence = ["la", "temperatura", "es"].into_iter().collect();
    // Saturating cast; anything this large spells as digits anyway.
    out.extend_from(spell_signed(celsius.round() as i64));
    out.extend(["grados", "centígrados"]);
    Some(out)
}

/// "la estación es la primavera" / "la estación es el verano"
pub fn season_statement(season: Season) -> TokenSequence {
    ["la", "estación", "es", season.article(), season.as_str()]
        .into_iter()
        .collect()
}

fn push_day_month_year(out: &mut TokenSequence, fields: &CalendarFields) {
    out.extend_from(spell_signed(i64::from(fields.day)));
    out.push("de");
    out.push(fields.month.clone());
    out.push("de");
    out.extend_from(spell_signed(i64::from(fields.year)));
}

/// Every statement for one render: today's date, the selected date with its
/// season, and the weather when a reading exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseSet {
    /// Today's date in English, e.g. "Monday, October 19, 2026".
    pub today_english: String,
    pub today: TokenSequence,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<TokenSequence>,
    pub selected: TokenSequence,
    pub season_name: Season,
    pub season: TokenSequence,
}

impl PhraseSet {
    pub fn assemble(
        today: NaiveDate,
        selected: NaiveDate,
        temperature_celsius: Option<f64>,
    ) -> Self {
        let season = Season::from_date(selected);
        Self {
            today_english: english_long_date(today),
            today: today_statement(&CalendarFields::from_date(today)),
            weather: weather_statement(temperature_celsius),
            selected: selected_date_statement(&CalendarFields::from_date(selected)),
            season_name: season,
            season: season_statement(season),
        }
    }
}
