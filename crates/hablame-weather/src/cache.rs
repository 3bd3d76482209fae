//! Last fetched weather, kept as JSON next to the config file.

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::types::{Location, WeatherError, WeatherReport};

const CACHE_FILE: &str = "weather_cache.json";

/// Coordinates closer than this are treated as the same place.
const SAME_PLACE_DEGREES: f64 = 0.01;

#[derive(Debug, Clone)]
pub struct WeatherCache {
    cache_path: PathBuf,
}

impl WeatherCache {
    pub fn new(config_dir: &Path) -> Self {
        Self {
            cache_path: config_dir.join(CACHE_FILE),
        }
    }

    /// Read the cached report, if any.
    pub fn load(&self) -> Result<Option<WeatherReport>, WeatherError> {
        if !self.cache_path.exists() {
            return Ok(None);
        }
        let contents =
            std::fs::read_to_string(&self.cache_path).map_err(|e| self.error("read", e))?;
        let report = serde_json::from_str(&contents).map_err(|e| self.error("parse", e))?;
        Ok(Some(report))
    }

    pub fn store(&self, report: &WeatherReport) -> Result<(), WeatherError> {
        if let Some(parent) = self.cache_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| WeatherError::Cache(format!("create {}: {}", parent.display(), e)))?;
        }
        let contents =
            serde_json::to_string_pretty(report).map_err(|e| WeatherError::Cache(e.to_string()))?;
        std::fs::write(&self.cache_path, contents).map_err(|e| self.error("write", e))?;
        tracing::debug!("Weather cached at {}", self.cache_path.display());
        Ok(())
    }

    fn error(&self, action: &str, e: impl std::fmt::Display) -> WeatherError {
        WeatherError::Cache(format!("{} {}: {}", action, self.cache_path.display(), e))
    }

    /// The cached report when it is for `location` and younger than `max_age`.
    pub fn fresh(
        &self,
        location: &Location,
        max_age: Duration,
        now: DateTime<Utc>,
    ) -> Option<WeatherReport> {
        let report = match self.load() {
            Ok(report) => report?,
            Err(e) => {
                tracing::debug!("Ignoring weather cache: {}", e);
                return None;
            }
        };

        let same_place = (report.location.latitude - location.latitude).abs() < SAME_PLACE_DEGREES
            && (report.location.longitude - location.longitude).abs() < SAME_PLACE_DEGREES;
        let age = now.signed_duration_since(report.fetched_at);
        let young = age >= chrono::Duration::zero()
            && age.to_std().map_or(false, |age| age < max_age);

        (same_place && young).then_some(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CurrentWeather, WeatherCondition};
    use chrono::NaiveDate;

    fn madrid() -> Location {
        Location {
            latitude: 40.4168,
            longitude: -3.7038,
            label: None,
        }
    }

    fn report(fetched_at: DateTime<Utc>) -> WeatherReport {
        WeatherReport {
            current: CurrentWeather {
                temperature: 19.4,
                wind_speed: 5.0,
                condition: WeatherCondition::Clear,
                observed_at: NaiveDate::from_ymd_opt(2026, 10, 19)
                    .unwrap()
                    .and_hms_opt(9, 0, 0)
                    .unwrap(),
            },
            location: madrid(),
            fetched_at,
        }
    }

    #[test]
    fn test_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let cache = WeatherCache::new(dir.path());
        assert!(cache.load().unwrap().is_none());
    }

    #[test]
    fn test_store_then_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let cache = WeatherCache::new(&dir.path().join("nested"));
        let now = Utc::now();
        cache.store(&report(now)).unwrap();

        let later = now + chrono::Duration::minutes(5);
        let hit = cache.fresh(&madrid(), Duration::from_secs(900), later);
        assert_eq!(hit.map(|r| r.current.temperature), Some(19.4));
    }

    #[test]
    fn test_stale_or_elsewhere_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let cache = WeatherCache::new(dir.path());
        let now = Utc::now();
        cache.store(&report(now)).unwrap();

        let later = now + chrono::Duration::minutes(30);
        assert!(cache.fresh(&madrid(), Duration::from_secs(900), later).is_none());

        let paris = Location {
            latitude: 48.85,
            longitude: 2.35,
            label: None,
        };
        assert!(cache.fresh(&paris, Duration::from_secs(900), now).is_none());
    }

    #[test]
    fn test_corrupt_cache_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let cache = WeatherCache::new(dir.path());
        std::fs::write(dir.path().join(CACHE_FILE), "{not json").unwrap();
        assert!(matches!(cache.load(), Err(WeatherError::Cache(_))));
        assert!(cache.fresh(&madrid(), Duration::from_secs(900), Utc::now()).is_none());
    }
}
