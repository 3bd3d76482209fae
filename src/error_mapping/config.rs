use hablame_core::{AppError, ConfigError};

/// Config loading reports through anyhow; typed config failures keep their
/// own hints, anything else (IO) is passed through.
pub fn config_error(e: anyhow::Error) -> AppError {
    match e.downcast::<ConfigError>() {
        Ok(config) => AppError::Config(config),
        Err(other) => AppError::Other(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_config_error_is_kept() {
        let err = config_error(ConfigError::Invalid("weather: x".into()).into());
        assert!(matches!(err, AppError::Config(ConfigError::Invalid(_))));
        assert_eq!(err.user_message(), "Invalid configuration. Check your settings.");
    }

    #[test]
    fn test_other_failures_pass_through() {
        let err = config_error(anyhow::anyhow!("Failed to read config file"));
        assert!(matches!(err, AppError::Other(_)));
    }
}
