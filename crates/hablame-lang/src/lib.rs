//! Spanish phrase building for hablame.
//!
//! Spells numbers as Spanish words, translates calendar fields, classifies
//! seasons and assembles the sentences shown (and read aloud) for a date and
//! the current weather. Everything here is pure and synchronous.

pub mod calendar;
pub mod numerals;
pub mod phrase;
pub mod season;
pub mod token;

pub use calendar::{english_long_date, translate_month, translate_weekday, CalendarFields};
pub use numerals::{spell, spell_signed};
pub use phrase::{
    season_statement, selected_date_statement, today_statement, weather_statement, PhraseSet,
};
pub use season::{season_of, Season};
pub use token::{TokenSequence, WordToken};
