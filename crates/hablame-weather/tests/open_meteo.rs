//! Integration tests for WeatherProvider and WeatherService using wiremock.

use std::time::Duration;

use hablame_weather::{
    Location, RetryConfig, WeatherCache, WeatherCondition, WeatherError, WeatherProvider,
    WeatherService,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn madrid() -> Location {
    Location {
        latitude: 40.4168,
        longitude: -3.7038,
        label: Some("Madrid".to_string()),
    }
}

fn forecast_body(temperature: f64) -> serde_json::Value {
    serde_json::json!({
        "latitude": 40.4,
        "longitude": -3.7,
        "current_weather": {
            "temperature": temperature,
            "windspeed": 8.4,
            "winddirection": 210,
            "weathercode": 61,
            "is_day": 1,
            "time": "2026-10-19T10:00"
        }
    })
}

fn provider(server: &MockServer) -> WeatherProvider {
    WeatherProvider::new(&server.uri(), Duration::from_secs(5))
        .unwrap()
        .with_retry(RetryConfig::new(2, 1, 5))
}

#[tokio::test]
async fn test_fetch_current_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("current_weather", "true"))
        .and(query_param("latitude", "40.4168"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(21.6)))
        .mount(&mock_server)
        .await;

    let current = provider(&mock_server).fetch_current(&madrid()).await.unwrap();

    assert_eq!(current.temperature, 21.6);
    assert_eq!(current.condition, WeatherCondition::Rain);
    assert_eq!(current.wind_speed, 8.4);
}

#[tokio::test]
async fn test_fetch_retries_server_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(-2.4)))
        .mount(&mock_server)
        .await;

    let current = provider(&mock_server).fetch_current(&madrid()).await.unwrap();
    assert_eq!(current.temperature, -2.4);
}

#[tokio::test]
async fn test_fetch_gives_up_on_client_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad latitude"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = provider(&mock_server).fetch_current(&madrid()).await.unwrap_err();
    assert!(
        matches!(
            &err,
            WeatherError::Api { status: 400, message } if message.contains("bad latitude")
        ),
        "expected API error, got {err:?}"
    );
}

#[tokio::test]
async fn test_missing_current_weather_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "latitude": 40.4
        })))
        .mount(&mock_server)
        .await;

    let err = provider(&mock_server).fetch_current(&madrid()).await.unwrap_err();
    assert!(matches!(err, WeatherError::Parse(_)));
}

#[tokio::test]
async fn test_service_fetches_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(14.0)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = WeatherService::new(provider(&mock_server), Some(madrid()));
    let first = service.sample().await.unwrap();
    let second = service.sample().await.unwrap();

    assert_eq!(first.temperature_celsius, 14.0);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_service_without_location_has_no_sample() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(14.0)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let service = WeatherService::new(provider(&mock_server), None);
    assert!(service.sample().await.is_none());
    assert!(service.report().await.is_err());
}

#[tokio::test]
async fn test_service_uses_fresh_cache() {
    let mock_server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(9.5)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let warm = WeatherService::new(provider(&mock_server), Some(madrid()))
        .with_cache(WeatherCache::new(dir.path()), Duration::from_secs(600));
    assert_eq!(warm.sample().await.unwrap().temperature_celsius, 9.5);

    // A second service in the same directory reads the cache instead of the API.
    let cached = WeatherService::new(provider(&mock_server), Some(madrid()))
        .with_cache(WeatherCache::new(dir.path()), Duration::from_secs(600));
    assert_eq!(cached.sample().await.unwrap().temperature_celsius, 9.5);
}
