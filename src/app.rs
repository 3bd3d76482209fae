use std::time::Duration;

use hablame_audio::{AudioCatalog, CommandPlayer, Narrator, PlaybackReport};
use hablame_core::{AppError, Config};
use hablame_lang::TokenSequence;
use hablame_weather::{
    location, LocationError, WeatherCache, WeatherProvider, WeatherReport, WeatherSample,
    WeatherService,
};

use crate::error_mapping::{audio_error, weather_error};

/// Application state: config plus the weather and audio collaborators.
pub struct App {
    config: Config,
    weather: Option<WeatherService>,
    narrator: Narrator<CommandPlayer>,
}

impl App {
    /// Wire up services from `config`. `latitude`/`longitude` override the
    /// configured location when given.
    pub fn new(
        config: Config,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Self, AppError> {
        let weather = if config.weather.enabled {
            Some(Self::weather_service(&config, latitude, longitude)?)
        } else {
            tracing::info!("Weather disabled in config");
            None
        };

        let clips_dir = config.clips_dir();
        let catalog = AudioCatalog::discover(&clips_dir);
        tracing::debug!("{} recorded words in {}", catalog.len(), clips_dir.display());
        let player = CommandPlayer::new(
            config.audio.player.clone(),
            config.audio.player_args.clone(),
        );

        Ok(Self {
            config,
            weather,
            narrator: Narrator::new(catalog, player),
        })
    }

    fn weather_service(
        config: &Config,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<WeatherService, AppError> {
        let settings = &config.weather;
        let location = match location::resolve(
            latitude.or(settings.latitude),
            longitude.or(settings.longitude),
            settings.place_name.clone(),
        ) {
            Ok(location) => Some(location),
            Err(LocationError::NotConfigured) => None,
            Err(e) => return Err(weather_error(&e.into())),
        };

        let timeout = Duration::from_secs(settings.timeout_secs);
        let provider =
            WeatherProvider::new(&settings.api_url, timeout).map_err(|e| weather_error(&e))?;
        let max_age = Duration::from_secs(u64::from(settings.refresh_minutes) * 60);

        Ok(WeatherService::new(provider, location)
            .with_cache(WeatherCache::new(config.weather_cache_dir()), max_age))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current temperature, or `None` while weather is unavailable.
    pub async fn weather_sample(&self) -> Option<WeatherSample> {
        match &self.weather {
            Some(service) => service.sample().await,
            None => None,
        }
    }

    /// Full weather report; the error explains why there is none.
    pub async fn weather_report(&self) -> Result<&WeatherReport, AppError> {
        let service = self.weather.as_ref().ok_or_else(|| {
            AppError::Other(anyhow::anyhow!("weather is disabled in the config"))
        })?;
        service.report().await.map_err(weather_error)
    }

    /// Read `sentence` aloud through the configured player.
    pub async fn speak(&self, sentence: &TokenSequence) -> Result<PlaybackReport, AppError> {
        let report = self.narrator.speak(sentence).await.map_err(audio_error)?;
        if !report.skipped.is_empty() {
            tracing::debug!("No recording for: {}", report.skipped.join(", "));
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hablame_core::WeatherError;

    fn config_in(dir: &std::path::Path) -> Config {
        Config {
            config_dir: dir.to_path_buf(),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_no_location_means_no_weather() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(config_in(dir.path()), None, None).unwrap();
        assert!(app.weather_sample().await.is_none());
        let err = app.weather_report().await.unwrap_err();
        assert!(err.user_message().contains("No location"));
    }

    #[tokio::test]
    async fn test_disabled_weather() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.weather.enabled = false;
        let app = App::new(config, Some(40.4), Some(-3.7)).unwrap();
        assert!(app.weather_sample().await.is_none());
        assert!(app.weather_report().await.is_err());
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = App::new(config_in(dir.path()), Some(100.0), Some(0.0));
        assert!(matches!(result, Err(AppError::Weather(_))));
    }

    #[test]
    fn test_half_override_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = App::new(config_in(dir.path()), Some(40.0), None);
        assert!(matches!(
            result,
            Err(AppError::Weather(WeatherError::IncompleteLocation))
        ));
    }

    #[test]
    fn test_half_override_completes_configured_location() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.weather.latitude = Some(40.4);
        config.weather.longitude = Some(-3.7);
        assert!(App::new(config, Some(41.0), None).is_ok());
    }

    #[tokio::test]
    async fn test_speak_skips_missing_clips() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(config_in(dir.path()), None, None).unwrap();
        let sentence: TokenSequence = ["la", "estación", "es", "el", "otono"]
            .into_iter()
            .collect();
        let report = app.speak(&sentence).await.unwrap();
        assert_eq!(report.played, 0);
        assert_eq!(report.skipped.len(), 5);
    }
}
