use hablame_core::{AppError, ReqwestErrorExt, WeatherError};
use hablame_weather::{LocationError, WeatherError as ServiceWeatherError};

pub fn weather_error(e: &ServiceWeatherError) -> AppError {
    match e {
        ServiceWeatherError::Network(err) => AppError::Network(err.to_network_error()),
        ServiceWeatherError::Location(LocationError::NotConfigured) => {
            AppError::Weather(WeatherError::LocationNotConfigured)
        }
        ServiceWeatherError::Location(LocationError::Incomplete) => {
            AppError::Weather(WeatherError::IncompleteLocation)
        }
        ServiceWeatherError::Location(err @ LocationError::InvalidCoordinates { .. }) => {
            AppError::Weather(WeatherError::InvalidLocation(err.to_string()))
        }
        ServiceWeatherError::Api { .. } | ServiceWeatherError::Parse(_) => {
            AppError::Weather(WeatherError::ApiError(e.to_string()))
        }
        ServiceWeatherError::Cache(msg) => AppError::Weather(WeatherError::CacheError(msg.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_location_maps_to_hint() {
        let err = weather_error(&ServiceWeatherError::Location(LocationError::NotConfigured));
        assert!(matches!(err, AppError::Weather(WeatherError::LocationNotConfigured)));
    }

    #[test]
    fn test_half_location_has_its_own_hint() {
        let err = weather_error(&ServiceWeatherError::Location(LocationError::Incomplete));
        assert!(err.user_message().contains("--lat and --lon"));
    }

    #[test]
    fn test_api_error_keeps_detail() {
        let err = weather_error(&ServiceWeatherError::Api {
            status: 502,
            message: "bad gateway".into(),
        });
        assert!(err.to_string().contains("bad gateway"));
        assert_eq!(err.user_message(), "Weather service error. Please try again.");
    }
}
