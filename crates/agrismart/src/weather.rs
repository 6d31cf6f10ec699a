//! Current weather conditions.
//!
//! Weather is display data: callers fall back to [`WeatherConditions::default`]
//! or placeholders when a lookup fails, and nothing retries.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::config::WeatherConfig;
use crate::error::{Error, Result};
use crate::location::Coordinates;

const SERVICE: &str = "openweather";

/// The inputs the pest model needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherConditions {
    /// Air temperature in °C.
    pub temp: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Rain over the last hour in millimetres.
    pub rainfall: f64,
}

impl Default for WeatherConditions {
    fn default() -> Self {
        Self {
            temp: 25.0,
            humidity: 60.0,
            rainfall: 5.0,
        }
    }
}

/// A current-conditions report, rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    /// Temperature in whole °C.
    pub temperature_c: i64,
    /// Apparent temperature in whole °C.
    pub feels_like_c: i64,
    /// Relative humidity in percent.
    pub humidity_percent: u8,
    /// Wind speed in whole km/h.
    pub wind_kmh: i64,
    /// Short condition label (`Clouds`, `Rain`, ...).
    pub condition: String,
    /// Provider icon code.
    pub icon: String,
    /// Station or city name.
    pub city: String,
    /// Country code reported by the provider.
    pub country: String,
    /// Rain over the last hour in millimetres.
    pub rain_1h_mm: f64,
    /// Unrounded temperature, kept for the pest model.
    #[serde(skip)]
    raw_temp: f64,
    /// When the provider observed these conditions.
    pub observed_at: DateTime<Utc>,
}

impl WeatherReport {
    /// Conditions for the pest model.
    #[must_use]
    pub fn conditions(&self) -> WeatherConditions {
        WeatherConditions {
            temp: self.raw_temp,
            humidity: f64::from(self.humidity_percent),
            rainfall: self.rain_1h_mm,
        }
    }

    /// Label for the humidity card.
    #[must_use]
    pub fn humidity_label(&self) -> &'static str {
        if self.humidity_percent > 70 {
            "High moisture"
        } else {
            "Normal levels"
        }
    }

    /// Label for the wind card.
    #[must_use]
    pub fn wind_label(&self) -> &'static str {
        if self.wind_kmh > 20 {
            "Moderate wind"
        } else {
            "Calm conditions"
        }
    }
}

/// A source of current weather.
#[async_trait::async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions at `coordinates`.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails or the answer is unusable.
    async fn current(&self, coordinates: Coordinates) -> Result<WeatherReport>;
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    main: String,
    icon: String,
}

#[derive(Debug, Default, Deserialize)]
struct OwmRain {
    #[serde(rename = "1h", default)]
    one_hour: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct OwmSys {
    #[serde(default)]
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwmResponse {
    main: OwmMain,
    wind: OwmWind,
    #[serde(default)]
    weather: Vec<OwmCondition>,
    #[serde(default)]
    rain: Option<OwmRain>,
    #[serde(default)]
    sys: OwmSys,
    #[serde(default)]
    name: String,
    #[serde(default)]
    dt: Option<i64>,
}

/// Round a float to the nearest integer for display.
#[allow(clippy::cast_possible_truncation)]
fn round(value: f64) -> i64 {
    value.round() as i64
}

impl OwmResponse {
    fn into_report(self) -> Result<WeatherReport> {
        let condition = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| Error::malformed(SERVICE, "response has no weather entries"))?;
        let observed_at = self
            .dt
            .and_then(|dt| Utc.timestamp_opt(dt, 0).single())
            .unwrap_or_else(Utc::now);

        Ok(WeatherReport {
            temperature_c: round(self.main.temp),
            feels_like_c: round(self.main.feels_like),
            humidity_percent: self.main.humidity,
            wind_kmh: round(self.wind.speed * 3.6),
            condition: condition.main,
            icon: condition.icon,
            city: self.name,
            country: self.sys.country.unwrap_or_default(),
            rain_1h_mm: self.rain.and_then(|rain| rain.one_hour).unwrap_or(0.0),
            raw_temp: self.main.temp,
            observed_at,
        })
    }
}

/// Parse an OpenWeather current-weather body.
///
/// # Errors
///
/// Returns an error if the body is not the expected JSON shape.
pub fn parse_current_weather(body: &str) -> Result<WeatherReport> {
    serde_json::from_str::<OwmResponse>(body)?.into_report()
}

/// HTTP client for the OpenWeather current-weather endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenWeatherClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &WeatherConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().filter(|key| !key.trim().is_empty()),
        })
    }
}

#[async_trait::async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, coordinates: Coordinates) -> Result<WeatherReport> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(Error::MissingApiKey { service: SERVICE })?;
        let url = format!("{}/weather", self.base_url);
        tracing::debug!(%url, %coordinates, "fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", coordinates.latitude.to_string()),
                ("lon", coordinates.longitude.to_string()),
                ("appid", api_key.to_string()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                service: SERVICE,
                status,
                body: response.text().await.unwrap_or_default(),
            });
        }

        response.json::<OwmResponse>().await?.into_report()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
        "main": {"temp": 27.6, "feels_like": 30.2, "humidity": 83, "pressure": 1008},
        "wind": {"speed": 4.2, "deg": 240},
        "rain": {"1h": 12.5},
        "dt": 1760000000,
        "sys": {"country": "IN"},
        "name": "Bhopal"
    }"#;

    #[test]
    fn test_parse_report() {
        let report = parse_current_weather(BODY).unwrap();
        assert_eq!(report.temperature_c, 28);
        assert_eq!(report.feels_like_c, 30);
        assert_eq!(report.humidity_percent, 83);
        assert_eq!(report.wind_kmh, 15);
        assert_eq!(report.condition, "Rain");
        assert_eq!(report.icon, "10d");
        assert_eq!(report.city, "Bhopal");
        assert_eq!(report.country, "IN");
        assert_eq!(report.observed_at.timestamp(), 1_760_000_000);
    }

    #[test]
    fn test_conditions_use_unrounded_temperature() {
        let conditions = parse_current_weather(BODY).unwrap().conditions();
        assert!((conditions.temp - 27.6).abs() < f64::EPSILON);
        assert!((conditions.humidity - 83.0).abs() < f64::EPSILON);
        assert!((conditions.rainfall - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_rain_is_zero() {
        let body = r#"{
            "weather": [{"main": "Clear", "icon": "01d"}],
            "main": {"temp": 20.0, "feels_like": 19.0, "humidity": 40},
            "wind": {"speed": 1.0},
            "name": "Fresno"
        }"#;
        let report = parse_current_weather(body).unwrap();
        assert!(report.rain_1h_mm.abs() < f64::EPSILON);
        assert_eq!(report.country, "");
    }

    #[test]
    fn test_missing_weather_entries_is_malformed() {
        let body = r#"{
            "weather": [],
            "main": {"temp": 20.0, "feels_like": 19.0, "humidity": 40},
            "wind": {"speed": 1.0}
        }"#;
        let err = parse_current_weather(body).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
    }

    #[test]
    fn test_missing_main_block_is_json_error() {
        let err = parse_current_weather(r#"{"cod": 401, "message": "Invalid API key"}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_labels() {
        let mut report = parse_current_weather(BODY).unwrap();
        assert_eq!(report.humidity_label(), "High moisture");
        assert_eq!(report.wind_label(), "Calm conditions");

        report.humidity_percent = 50;
        report.wind_kmh = 25;
        assert_eq!(report.humidity_label(), "Normal levels");
        assert_eq!(report.wind_label(), "Moderate wind");
    }

    #[test]
    fn test_default_conditions() {
        let conditions = WeatherConditions::default();
        assert!((conditions.temp - 25.0).abs() < f64::EPSILON);
        assert!((conditions.humidity - 60.0).abs() < f64::EPSILON);
        assert!((conditions.rainfall - 5.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_fast() {
        let client = OpenWeatherClient::from_config(&WeatherConfig::default()).unwrap();
        let err = client
            .current(Coordinates::new(23.2599, 77.4126))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingApiKey { .. }));
    }
}
