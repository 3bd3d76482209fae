//! Open-Meteo current weather client.

use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use crate::retry::{with_retry, RetryConfig};
use crate::types::{CurrentWeather, Location, WeatherCondition, WeatherError};

const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<RawCurrentWeather>,
}

#[derive(Debug, Deserialize)]
struct RawCurrentWeather {
    temperature: f64,
    #[serde(default)]
    windspeed: f64,
    #[serde(default)]
    weathercode: i32,
    time: String,
}

impl TryFrom<RawCurrentWeather> for CurrentWeather {
    type Error = WeatherError;

    fn try_from(raw: RawCurrentWeather) -> Result<Self, Self::Error> {
        let observed_at = NaiveDateTime::parse_from_str(&raw.time, TIME_FORMAT)
            .map_err(|e| WeatherError::Parse(format!("bad time {:?}: {}", raw.time, e)))?;
        Ok(Self {
            temperature: raw.temperature,
            wind_speed: raw.windspeed,
            condition: WeatherCondition::from_wmo_code(raw.weathercode),
            observed_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    base_url: String,
    retry: RetryConfig,
}

impl WeatherProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, WeatherError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.trim_end_matches('/').to_string(),
            retry: RetryConfig::default(),
        })
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Fetch the current conditions for `location`.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_current(&self, location: &Location) -> Result<CurrentWeather, WeatherError> {
        let url = format!("{}/v1/forecast", self.base_url);
        let query = [
            ("latitude", location.latitude.to_string()),
            ("longitude", location.longitude.to_string()),
            ("current_weather", "true".to_string()),
        ];

        let response = with_retry(&self.retry, || {
            self.client.get(&url).query(&query).send()
        })
        .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::debug!("Open-Meteo returned {}: {}", status, message);
            return Err(WeatherError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        let raw = body
            .current_weather
            .ok_or_else(|| WeatherError::Parse("response has no current_weather".to_string()))?;

        let current = CurrentWeather::try_from(raw)?;
        tracing::info!(
            "Current temperature {}°C ({})",
            current.temperature,
            current.condition.description()
        );
        Ok(current)
    }
}
