//! Maps crate errors to hablame_core::AppError for consistent user-facing messages.
//! Each service has its own module to keep mappings small and readable.

mod audio;
mod config;
mod weather;

pub use audio::audio_error;
pub use config::config_error;
pub use weather::weather_error;
