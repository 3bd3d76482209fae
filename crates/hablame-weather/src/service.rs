//! One weather lookup per process.

use chrono::Utc;
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::cache::WeatherCache;
use crate::provider::WeatherProvider;
use crate::types::{Location, LocationError, WeatherError, WeatherReport, WeatherSample};

/// Resolves the current weather at most once: a fresh cache entry is used
/// as-is, otherwise the provider is asked and the result is cached. The
/// outcome, success or failure, is kept for the life of the service.
pub struct WeatherService {
    provider: WeatherProvider,
    location: Option<Location>,
    cache: Option<WeatherCache>,
    max_age: Duration,
    outcome: OnceCell<Result<WeatherReport, WeatherError>>,
}

impl WeatherService {
    pub fn new(provider: WeatherProvider, location: Option<Location>) -> Self {
        Self {
            provider,
            location,
            cache: None,
            max_age: Duration::ZERO,
            outcome: OnceCell::new(),
        }
    }

    /// Reuse cached readings younger than `max_age`.
    pub fn with_cache(mut self, cache: WeatherCache, max_age: Duration) -> Self {
        self.cache = Some(cache);
        self.max_age = max_age;
        self
    }

    /// The report, fetching it on first call.
    pub async fn report(&self) -> Result<&WeatherReport, &WeatherError> {
        self.outcome.get_or_init(|| self.resolve()).await.as_ref()
    }

    /// Just the temperature, or `None` when weather is unavailable.
    pub async fn sample(&self) -> Option<WeatherSample> {
        match self.report().await {
            Ok(report) => Some(report.sample()),
            Err(WeatherError::Location(LocationError::NotConfigured)) => None,
            Err(e) => {
                tracing::debug!("Weather unavailable: {}", e);
                None
            }
        }
    }

    async fn resolve(&self) -> Result<WeatherReport, WeatherError> {
        let location = self.location.as_ref().ok_or(LocationError::NotConfigured)?;

        if let Some(cache) = &self.cache {
            if let Some(report) = cache.fresh(location, self.max_age, Utc::now()) {
                tracing::info!("Using cached weather from {}", report.fetched_at);
                return Ok(report);
            }
        }

        let current = match self.provider.fetch_current(location).await {
            Ok(current) => current,
            Err(e) => {
                tracing::debug!("Weather fetch failed: {}", e);
                return Err(e);
            }
        };

        let report = WeatherReport {
            current,
            location: location.clone(),
            fetched_at: Utc::now(),
        };

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.store(&report) {
                tracing::debug!("Failed to cache weather: {}", e);
            }
        }

        Ok(report)
    }
}
