//! Full pipeline runs against mocked Nominatim and Open-Meteo servers.

use chrono::NaiveDate;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zip_forecast_core::{Config, Pipeline, PipelineError};

fn config_for(geocoder: &MockServer, forecast: &MockServer) -> Config {
    Config {
        geocoder_url: format!("{}/search", geocoder.uri()),
        forecast_url: format!("{}/v1/forecast", forecast.uri()),
        request_timeout_secs: 5,
        ..Config::default()
    }
}

async fn mount_geocoder(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("postalcode", "64093"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

#[tokio::test]
async fn prints_tomorrow_for_configured_zip() {
    let geocoder = MockServer::start().await;
    let forecast = MockServer::start().await;

    mount_geocoder(&geocoder, serde_json::json!([{"lat": "38.7627893", "lon": "-93.7360498"}]))
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "38.7627893"))
        .and(query_param("longitude", "-93.7360498"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "daily": {
                "time": ["2024-01-01", "2024-01-02"],
                "temperature_2m_max": [35.1, 38.4],
                "temperature_2m_min": [18.0, 21.7],
                "precipitation_sum": [0.0, 5.3],
                "windspeed_10m_max": [11.0, 17.9],
                "weathercode": [0, 65]
            }
        })))
        .expect(1)
        .mount(&forecast)
        .await;

    let cfg = config_for(&geocoder, &forecast);
    let pipeline = Pipeline::from_config(&cfg).unwrap();

    let mut out = Vec::new();
    let report = pipeline.run(&cfg.forecast_request(), today(), &mut out).await.unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(report.condition, "Rain (heavy)");
    assert!(!text.contains("Warning"));
    assert!(text.contains("lat: 38.7627893\nlon: -93.7360498\n"));
    assert!(text.contains("Weather Forecast for 2024-01-02 (ZIP 64093, Warrensburg, MO):"));
    assert!(text.contains("Precipitation: 5.3 mm"));
    assert!(text.contains("Max Wind Speed: 17.9 mph"));
}

#[tokio::test]
async fn unknown_zip_never_reaches_forecast_service() {
    let geocoder = MockServer::start().await;
    let forecast = MockServer::start().await;

    mount_geocoder(&geocoder, serde_json::json!([])).await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&forecast)
        .await;

    let cfg = config_for(&geocoder, &forecast);
    let pipeline = Pipeline::from_config(&cfg).unwrap();

    let mut out = Vec::new();
    let err = pipeline.run(&cfg.forecast_request(), today(), &mut out).await.unwrap_err();

    assert!(matches!(err, PipelineError::Geocoding(_)));
    assert_eq!(err.to_string(), "Geocoding error: ZIP code not found: 64093");
}

#[tokio::test]
async fn response_without_daily_is_reported_not_panicked() {
    let geocoder = MockServer::start().await;
    let forecast = MockServer::start().await;

    mount_geocoder(&geocoder, serde_json::json!([{"lat": "38.76", "lon": "-93.73"}])).await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"generationtime_ms": 0.1})),
        )
        .mount(&forecast)
        .await;

    let cfg = config_for(&geocoder, &forecast);
    let pipeline = Pipeline::from_config(&cfg).unwrap();

    let mut out = Vec::new();
    let err = pipeline.run(&cfg.forecast_request(), today(), &mut out).await.unwrap_err();

    assert!(matches!(err, PipelineError::Weather(_)));
    assert!(err.to_string().starts_with("Weather API error: "));
}

#[tokio::test]
async fn null_today_reading_still_prints_report() {
    let geocoder = MockServer::start().await;
    let forecast = MockServer::start().await;

    mount_geocoder(&geocoder, serde_json::json!([{"lat": "38.76", "lon": "-93.73"}])).await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"daily":{"time":["2024-01-01","2024-01-02"],
            "temperature_2m_max":[40.0,45.0],"temperature_2m_min":[20.0,28.0],
            "precipitation_sum":[null,0.0],"windspeed_10m_max":[8.0,12.0],
            "weathercode":[null,3]}}"#,
        ))
        .mount(&forecast)
        .await;

    let cfg = config_for(&geocoder, &forecast);
    let pipeline = Pipeline::from_config(&cfg).unwrap();

    let mut out = Vec::new();
    pipeline.run(&cfg.forecast_request(), today(), &mut out).await.unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.ends_with(
        "Condition: Overcast\n\
         High: 45.0°F\n\
         Low: 28.0°F\n\
         Precipitation: 0.0 mm\n\
         Max Wind Speed: 12.0 mph\n"
    ));
}
