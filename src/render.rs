//! Text layout for the terminal.

use std::fmt;

use hablame_lang::PhraseSet;
use hablame_weather::WeatherReport;

pub const WEATHER_PENDING: &str = "Obteniendo clima...";

/// The four cards: today, weather, selected date and season.
pub struct Board<'a> {
    pub set: &'a PhraseSet,
    pub weather: Option<&'a WeatherReport>,
}

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set = self.set;

        section(f, "Fecha Actual")?;
        writeln!(f, "  {}", set.today_english)?;
        writeln!(f, "  {}", set.today)?;

        writeln!(f)?;
        section(f, "Clima Actual")?;
        match (&set.weather, self.weather) {
            (Some(statement), Some(report)) => {
                writeln!(f, "  {}", WeatherLine(report))?;
                writeln!(f, "  {}", statement)?;
            }
            (Some(statement), None) => writeln!(f, "  {}", statement)?,
            (None, _) => writeln!(f, "  {}", WEATHER_PENDING)?,
        }

        writeln!(f)?;
        section(f, "Fecha Seleccionada")?;
        writeln!(f, "  {}", set.selected)?;

        writeln!(f)?;
        section(f, "Estación")?;
        writeln!(f, "  {}", set.season)
    }
}

/// "21.6 °C, nublado, viento 3 km/h (Madrid)"
pub struct WeatherLine<'a>(pub &'a WeatherReport);

impl fmt::Display for WeatherLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let current = &self.0.current;
        write!(
            f,
            "{} °C, {}, viento {} km/h",
            current.temperature,
            current.condition.description(),
            current.wind_speed
        )?;
        if let Some(label) = &self.0.location.label {
            write!(f, " ({label})")?;
        }
        Ok(())
    }
}

fn section(f: &mut impl fmt::Write, title: &str) -> fmt::Result {
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "-".repeat(title.chars().count()))
}
