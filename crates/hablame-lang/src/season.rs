//! Season classification by month.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four seasons, named in Spanish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Invierno,
    Primavera,
    Verano,
    Otono,
}

impl Season {
    /// Season for a month number. Dec/Jan/Feb are winter, Mar/Apr/May
    /// spring, Jun/Jul/Aug summer; every other value lands on autumn,
    /// including numbers outside 1..=12.
    pub const fn of(month: u32) -> Self {
        match month {
            12 | 1 | 2 => Self::Invierno,
            3..=5 => Self::Primavera,
            6..=8 => Self::Verano,
            _ => Self::Otono,
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::of(date.month())
    }

    /// Spanish name, as spoken.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Invierno => "invierno",
            Self::Primavera => "primavera",
            Self::Verano => "verano",
            Self::Otono => "otono",
        }
    }

    /// Article used before the season name: "primavera" takes "la".
    pub const fn article(self) -> &'static str {
        match self {
            Self::Primavera => "la",
            _ => "el",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-function form of [`Season::of`].
pub const fn season_of(month: u32) -> Season {
    Season::of(month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_representative_months() {
        assert_eq!(season_of(1), Season::Invierno);
        assert_eq!(season_of(4), Season::Primavera);
        assert_eq!(season_of(7), Season::Verano);
        assert_eq!(season_of(10), Season::Otono);
    }

    #[test]
    fn test_full_year_mapping() {
        let expected = [
            Season::Invierno,
            Season::Invierno,
            Season::Primavera,
            Season::Primavera,
            Season::Primavera,
            Season::Verano,
            Season::Verano,
            Season::Verano,
            Season::Otono,
            Season::Otono,
            Season::Otono,
            Season::Invierno,
        ];
        for (month, season) in (1..=12).zip(expected) {
            assert_eq!(season_of(month), season, "month {month}");
            assert_eq!(season_of(month), season_of(month));
        }
    }

    #[test]
    fn test_out_of_range_months_fall_to_autumn() {
        assert_eq!(season_of(0), Season::Otono);
        assert_eq!(season_of(13), Season::Otono);
    }

    #[test]
    fn test_articles() {
        assert_eq!(Season::Primavera.article(), "la");
        assert_eq!(Season::Invierno.article(), "el");
        assert_eq!(Season::Verano.article(), "el");
        assert_eq!(Season::Otono.article(), "el");
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();
        assert_eq!(Season::from_date(date), Season::Primavera);
    }

    #[test]
    fn test_serde_uses_spanish_names() {
        assert_eq!(serde_json::to_string(&Season::Otono).unwrap(), r#""otono""#);
        assert_eq!(serde_json::to_string(&Season::Verano).unwrap(), r#""verano""#);
    }
}
