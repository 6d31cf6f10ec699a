mod common;

use axum::http::StatusCode;

use agrismart::config::WeatherConfig;
use agrismart::pest::{self, RiskLevel, RiskSummary};
use agrismart::weather::{OpenWeatherClient, WeatherProvider};
use agrismart::{Coordinates, Error};

use common::{start_stub, CURRENT_WEATHER};

fn client_for(url: &str, api_key: Option<&str>) -> OpenWeatherClient {
    OpenWeatherClient::from_config(&WeatherConfig {
        base_url: url.to_string(),
        api_key: api_key.map(str::to_string),
        ..WeatherConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_current_weather() {
    let stub = start_stub("/weather", StatusCode::OK, CURRENT_WEATHER).await;
    let client = client_for(stub.url(), Some("test-key"));

    let report = client
        .current(Coordinates::new(30.901, 75.8573))
        .await
        .unwrap();
    assert_eq!(report.city, "Ludhiana");
    assert_eq!(report.temperature_c, 24);
    assert_eq!(report.feels_like_c, 25);
    assert_eq!(report.humidity_percent, 82);
    assert_eq!(report.wind_kmh, 9);
    assert_eq!(report.condition, "Clouds");

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    let query = &requests[0].query;
    assert_eq!(query["appid"], "test-key");
    assert_eq!(query["units"], "metric");
    assert_eq!(query["lat"], "30.901");
    assert_eq!(query["lon"], "75.8573");

    stub.stop().await;
}

#[tokio::test]
async fn test_live_conditions_drive_pest_forecast() {
    let stub = start_stub("/weather", StatusCode::OK, CURRENT_WEATHER).await;
    let report = client_for(stub.url(), Some("test-key"))
        .current(Coordinates::new(30.901, 75.8573))
        .await
        .unwrap();

    let risks = pest::assess(&report.conditions());
    assert_eq!(risks[0].name, "Fungal Diseases");
    assert_eq!(risks[0].level, RiskLevel::High);
    assert_eq!(RiskSummary::of(&risks), RiskSummary { high: 2, medium: 4 });

    stub.stop().await;
}

#[tokio::test]
async fn test_unauthorized() {
    let stub = start_stub(
        "/weather",
        StatusCode::UNAUTHORIZED,
        r#"{"cod":401,"message":"Invalid API key"}"#,
    )
    .await;

    let err = client_for(stub.url(), Some("wrong"))
        .current(Coordinates::new(0.0, 0.0))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Status { status, .. } if status.as_u16() == 401));

    stub.stop().await;
}

#[tokio::test]
async fn test_missing_key_sends_nothing() {
    let stub = start_stub("/weather", StatusCode::OK, CURRENT_WEATHER).await;

    let err = client_for(stub.url(), Some("   "))
        .current(Coordinates::new(0.0, 0.0))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingApiKey { service: "openweather" }));
    assert!(stub.requests().is_empty());

    stub.stop().await;
}
