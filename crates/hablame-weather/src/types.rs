use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Weather condition categories mapped from WMO codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    #[default]
    Clear,
    PartlyCloudy,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    HeavyRain,
    Snow,
    Sleet,
    Thunderstorm,
}

impl WeatherCondition {
    /// Convert WMO weather code to WeatherCondition
    /// See: https://open-meteo.com/en/docs#weathervariables
    pub fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::Clear,
            1..=2 => Self::PartlyCloudy,
            3 => Self::Cloudy,
            45 | 48 => Self::Fog,
            51 | 53 | 55 => Self::Drizzle,
            56 | 57 => Self::Sleet, // Freezing drizzle
            61 | 63 | 80 => Self::Rain,
            65 | 81 | 82 => Self::HeavyRain,
            66 | 67 => Self::Sleet, // Freezing rain
            71 | 73 | 75 | 77 | 85 | 86 => Self::Snow,
            95 | 96 | 99 => Self::Thunderstorm,
            _ => Self::Clear,
        }
    }

    /// Spanish description shown under the temperature
    pub fn description(&self) -> &'static str {
        match self {
            Self::Clear => "despejado",
            Self::PartlyCloudy => "parcialmente nublado",
            Self::Cloudy => "nublado",
            Self::Fog => "niebla",
            Self::Drizzle => "llovizna",
            Self::Rain => "lluvia",
            Self::HeavyRain => "lluvia fuerte",
            Self::Snow => "nieve",
            Self::Sleet => "aguanieve",
            Self::Thunderstorm => "tormenta",
        }
    }
}

/// Geographic location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub label: Option<String>,
}

/// Current conditions as reported by Open-Meteo's `current_weather` block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    /// km/h
    pub wind_speed: f64,
    pub condition: WeatherCondition,
    /// Observation time (GMT) as given by the API
    pub observed_at: NaiveDateTime,
}

/// The one number the phrases need: degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    pub temperature_celsius: f64,
}

impl From<&CurrentWeather> for WeatherSample {
    fn from(current: &CurrentWeather) -> Self {
        Self {
            temperature_celsius: current.temperature,
        }
    }
}

/// A fetched reading together with where and when it was fetched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentWeather,
    pub location: Location,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherReport {
    pub fn sample(&self) -> WeatherSample {
        WeatherSample::from(&self.current)
    }
}

/// Location errors
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("No location configured")]
    NotConfigured,
    #[error("Latitude and longitude must be given together")]
    Incomplete,
    #[error("Invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Location error: {0}")]
    Location(#[from] LocationError),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Cache error: {0}")]
    Cache(String),
}
