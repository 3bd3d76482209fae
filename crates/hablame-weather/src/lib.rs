//! Weather service for hablame
//!
//! Fetches the current temperature from the Open-Meteo API for a configured
//! location, with retry on transient failures and a small on-disk cache.

pub mod cache;
pub mod location;
pub mod provider;
pub mod retry;
pub mod service;
pub mod types;

pub use cache::WeatherCache;
pub use provider::WeatherProvider;
pub use retry::RetryConfig;
pub use service::WeatherService;
pub use types::*;
