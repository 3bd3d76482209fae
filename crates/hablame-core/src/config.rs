use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::ConfigError;

const APP_DIR: &str = "hablame";
const CONFIG_FILE: &str = "config.toml";
const CLIPS_DIR: &str = "audio";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// All errors joined into one line
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the config file and the weather cache
    #[serde(skip, default = "default_config_dir")]
    pub config_dir: PathBuf,

    /// Weather settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Audio playback settings
    #[serde(default)]
    pub audio: AudioConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Set to false to never fetch weather
    pub enabled: bool,

    /// Base URL of the Open-Meteo API
    pub api_url: String,

    /// Where to ask for weather; both must be set
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// Optional place name shown next to the reading
    pub place_name: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Cached readings younger than this are reused
    pub refresh_minutes: u32,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: "https://api.open-meteo.com".to_string(),
            latitude: None,
            longitude: None,
            place_name: None,
            timeout_secs: 10,
            refresh_minutes: 15,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Directory of `<word>.mp3` clips (default: `audio/` next to the config file)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clips_dir: Option<PathBuf>,

    /// Player program, invoked as `<player> <player_args..> <clip>`
    pub player: String,

    pub player_args: Vec<String>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            clips_dir: None,
            player: "mpg123".to_string(),
            player_args: vec!["-q".to_string()],
        }
    }
}

fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: default_config_dir(),
            weather: WeatherConfig::default(),
            audio: AudioConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, creating it if missing
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it doesn't exist.
    /// The config directory becomes the file's parent directory.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        if !path.exists() {
            let config = Self {
                config_dir,
                ..Self::default()
            };
            config.save_to(path)?;
            tracing::info!("Wrote default config to {}", path.display());
            return Ok(config);
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let mut config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        config.config_dir = config_dir;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Warnings are logged at info level; errors fail the load.
    pub fn load_validated(path: Option<&Path>) -> Result<(Self, ValidationResult)> {
        let config = match path {
            Some(path) => Self::load_from(path)?,
            None => Self::load()?,
        };
        let validation = config.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }

        for warning in &validation.warnings {
            tracing::info!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_url(&self.weather.api_url, "weather.api_url", &mut result);

        match (self.weather.latitude, self.weather.longitude) {
            (Some(lat), _) if !(-90.0..=90.0).contains(&lat) => {
                result.add_error("weather.latitude", "Latitude must be between -90 and 90");
            }
            (_, Some(lon)) if !(-180.0..=180.0).contains(&lon) => {
                result.add_error("weather.longitude", "Longitude must be between -180 and 180");
            }
            (Some(_), None) | (None, Some(_)) => {
                result.add_error("weather", "Latitude and longitude must be set together");
            }
            (None, None) if self.weather.enabled => {
                result.add_warning("weather", "No location set - weather will be omitted");
            }
            _ => {}
        }

        if self.weather.timeout_secs == 0 {
            result.add_error("weather.timeout_secs", "Timeout must be greater than 0");
        }

        if self.weather.refresh_minutes > 1440 {
            result.add_warning(
                "weather.refresh_minutes",
                "Weather refresh interval is more than 24 hours",
            );
        }

        if self.audio.player.trim().is_empty() {
            result.add_error("audio.player", "Player program must not be empty");
        }

        let clips_dir = self.clips_dir();
        if clips_dir.exists() && !clips_dir.is_dir() {
            result.add_error(
                "audio.clips_dir",
                format!("Path is not a directory: {}", clips_dir.display()),
            );
        }

        result
    }

    fn validate_url(url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }
                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Directory the audio clips are read from
    pub fn clips_dir(&self) -> PathBuf {
        self.audio
            .clips_dir
            .clone()
            .unwrap_or_else(|| self.config_dir.join(CLIPS_DIR))
    }

    /// Directory the weather cache lives in
    pub fn weather_cache_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the default configuration file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join(APP_DIR);

        Ok(config_dir.join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_default_config() {
        let config = Config::default();
        let result = config.validate();
        assert!(result.is_valid(), "Default config should be valid: {:?}", result.errors);
    }

    #[test]
    fn test_missing_location_is_warning() {
        let result = Config::default().validate();
        assert!(result.warnings.iter().any(|w| w.field == "weather"));
    }

    #[test]
    fn test_invalid_url() {
        let mut config = Config::default();
        config.weather.api_url = "not-a-url".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "weather.api_url"));
    }

    #[test]
    fn test_invalid_url_scheme() {
        let mut config = Config::default();
        config.weather.api_url = "ftp://api.open-meteo.com".to_string();
        let result = config.validate();
        assert!(result.errors.iter().any(|e| e.message.contains("http or https")));
    }

    #[test]
    fn test_out_of_range_latitude() {
        let mut config = Config::default();
        config.weather.latitude = Some(123.0);
        config.weather.longitude = Some(0.0);
        let result = config.validate();
        assert!(result.errors.iter().any(|e| e.field == "weather.latitude"));
    }

    #[test]
    fn test_half_a_location_is_an_error() {
        let mut config = Config::default();
        config.weather.latitude = Some(40.4);
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.error_summary().contains("together"));
    }

    #[test]
    fn test_empty_player_is_an_error() {
        let mut config = Config::default();
        config.audio.player = "  ".to_string();
        assert!(!config.validate().is_valid());
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hablame").join("config.toml");

        let config = Config::load_from(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config.config_dir, dir.path().join("hablame"));
        assert_eq!(config.weather.refresh_minutes, 15);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[weather]\nlatitude = 40.4168\nlongitude = -3.7038\nplace_name = \"Madrid\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.weather.latitude, Some(40.4168));
        assert_eq!(config.weather.place_name.as_deref(), Some("Madrid"));
        assert_eq!(config.weather.api_url, "https://api.open-meteo.com");
        assert_eq!(config.audio.player, "mpg123");
        assert!(config.validate().is_valid());
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[weather\nlatitude = ").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_clips_dir_follows_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("elsewhere").join("config.toml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[weather]\nenabled = false\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.clips_dir(), dir.path().join("elsewhere").join("audio"));
    }

    #[test]
    fn test_explicit_clips_dir_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[audio]\nclips_dir = \"/srv/clips\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.clips_dir(), PathBuf::from("/srv/clips"));
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.weather.latitude = Some(19.43);
        config.weather.longitude = Some(-99.13);
        config.audio.player_args = vec!["--quiet".to_string()];

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(loaded.weather.latitude, Some(19.43));
        assert_eq!(loaded.audio.player_args, ["--quiet"]);
    }

    #[test]
    fn test_load_validated_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[weather]\ntimeout_secs = 0\n").unwrap();

        let err = Config::load_validated(Some(&path)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Invalid(msg)) if msg.contains("weather.timeout_secs")
        ));
    }

    #[test]
    fn test_validation_result_error_summary() {
        let mut result = ValidationResult::default();
        result.add_error("field1", "error1");
        result.add_error("field2", "error2");
        let summary = result.error_summary();
        assert!(summary.contains("field1"));
        assert!(summary.contains("field2"));
    }
}
