//! Centralized error types for hablame.
//!
//! Every failure that reaches the command line is converted to [`AppError`],
//! which carries a short message fit for printing next to the Spanish text.

use thiserror::Error;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Network(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
            AppError::Audio(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

/// Network-related errors (HTTP, connectivity).
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl NetworkError {
    pub fn user_message(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed(_) => {
                "Unable to connect. Check your internet connection."
            }
            NetworkError::Timeout => "The request timed out. Please try again.",
            NetworkError::ServerError { status, .. } if *status >= 500 => {
                "The server is experiencing issues. Please try again later."
            }
            NetworkError::ServerError { .. } => "The request failed. Please try again.",
            NetworkError::InvalidResponse(_) => {
                "Received an unexpected response. Please try again."
            }
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
        }
    }
}

/// Weather service errors.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("No location configured")]
    LocationNotConfigured,

    #[error("Incomplete location")]
    IncompleteLocation,

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Weather API error: {0}")]
    ApiError(String),

    #[error("Cache error: {0}")]
    CacheError(String),
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::LocationNotConfigured => {
                "No location set. Add latitude and longitude to the config or pass --lat/--lon."
            }
            WeatherError::IncompleteLocation => {
                "Latitude and longitude must be given together (--lat and --lon)."
            }
            WeatherError::InvalidLocation(_) => "Location coordinates are out of range.",
            WeatherError::ApiError(_) => "Weather service error. Please try again.",
            WeatherError::CacheError(_) => "Weather data may be outdated.",
        }
    }
}

/// Audio playback errors.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("Audio player not available: {0}")]
    PlayerUnavailable(String),

    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    #[error("Audio clips unavailable: {0}")]
    ClipsUnavailable(String),
}

impl AudioError {
    pub fn user_message(&self) -> &'static str {
        match self {
            AudioError::PlayerUnavailable(_) => {
                "Audio player not found. Install one or set audio.player in the config."
            }
            AudioError::PlaybackFailed(_) => "Some words could not be played.",
            AudioError::ClipsUnavailable(_) => "Audio clips not found. Check audio.clips_dir.",
        }
    }
}

/// Extension trait for converting reqwest errors to our error types.
pub trait ReqwestErrorExt {
    fn to_network_error(&self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn to_network_error(&self) -> NetworkError {
        if self.is_timeout() {
            NetworkError::Timeout
        } else if self.is_decode() {
            NetworkError::InvalidResponse(self.to_string())
        } else if let Some(status) = self.status() {
            NetworkError::ServerError {
                status: status.as_u16(),
                message: self.to_string(),
            }
        } else {
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}
