//! Reverse geocoding: coordinates to a named place.

use serde::{Deserialize, Serialize};

use crate::config::GeocodingConfig;
use crate::error::{Error, Result};

use super::Coordinates;

const SERVICE: &str = "nominatim";

/// A named place returned by reverse geocoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    /// City, town, village or county.
    pub city: String,
    /// State or region; may be empty.
    pub state: String,
    /// Country name.
    pub country: String,
    /// Upper-case country code, `XX` when the service gave none.
    pub country_code: String,
}

/// Something that can name the place at a pair of coordinates.
#[async_trait::async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Look up the place at `coordinates`.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails or the answer is unusable.
    async fn reverse(&self, coordinates: Coordinates) -> Result<Place>;
}

/// The `address` object of a Nominatim reverse response.
#[derive(Debug, Default, Deserialize)]
struct NominatimAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    county: Option<String>,
    state: Option<String>,
    region: Option<String>,
    country: Option<String>,
    country_code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: Option<NominatimAddress>,
    #[serde(default)]
    error: Option<String>,
}

impl NominatimAddress {
    fn into_place(self) -> Place {
        Place {
            city: present(self.city)
                .or_else(|| present(self.town))
                .or_else(|| present(self.village))
                .or_else(|| present(self.county))
                .unwrap_or_else(|| "Unknown".to_string()),
            state: present(self.state)
                .or_else(|| present(self.region))
                .unwrap_or_default(),
            country: present(self.country).unwrap_or_else(|| "Unknown".to_string()),
            country_code: present(self.country_code)
                .map_or_else(|| "XX".to_string(), |code| code.to_ascii_uppercase()),
        }
    }
}

/// Nominatim sometimes sends empty strings for fields it has no value for.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Map a raw Nominatim response body to a [`Place`].
///
/// # Errors
///
/// Returns an error if the body is not JSON or carries a Nominatim error.
pub fn parse_reverse_response(body: &str) -> Result<Place> {
    let response: ReverseResponse = serde_json::from_str(body)?;
    place_from_response(response)
}

fn place_from_response(response: ReverseResponse) -> Result<Place> {
    if let Some(message) = response.error {
        return Err(Error::malformed(SERVICE, message));
    }
    Ok(response.address.unwrap_or_default().into_place())
}

/// HTTP client for a Nominatim-compatible `/reverse` endpoint.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: reqwest::Client,
    base_url: String,
    zoom: u8,
}

impl NominatimClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &GeocodingConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            zoom: config.zoom,
        })
    }
}

#[async_trait::async_trait]
impl ReverseGeocoder for NominatimClient {
    async fn reverse(&self, coordinates: Coordinates) -> Result<Place> {
        let url = format!("{}/reverse", self.base_url);
        tracing::debug!(%url, %coordinates, "reverse geocoding");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("format", "json".to_string()),
                ("lat", coordinates.latitude.to_string()),
                ("lon", coordinates.longitude.to_string()),
                ("zoom", self.zoom.to_string()),
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

        place_from_response(response.json::<ReverseResponse>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_city() {
        let body = r#"{
            "display_name": "Bhopal, Madhya Pradesh, India",
            "address": {
                "city": "Bhopal",
                "state": "Madhya Pradesh",
                "country": "India",
                "country_code": "in"
            }
        }"#;
        let place = parse_reverse_response(body).unwrap();
        assert_eq!(place.city, "Bhopal");
        assert_eq!(place.state, "Madhya Pradesh");
        assert_eq!(place.country, "India");
        assert_eq!(place.country_code, "IN");
    }

    #[test]
    fn test_city_fallback_chain() {
        let town = r#"{"address": {"town": "Sehore", "village": "X", "county": "Y"}}"#;
        assert_eq!(parse_reverse_response(town).unwrap().city, "Sehore");

        let village = r#"{"address": {"village": "Kolar", "county": "Y"}}"#;
        assert_eq!(parse_reverse_response(village).unwrap().city, "Kolar");

        let county = r#"{"address": {"county": "Huzur"}}"#;
        assert_eq!(parse_reverse_response(county).unwrap().city, "Huzur");
    }

    #[test]
    fn test_state_falls_back_to_region() {
        let body = r#"{"address": {"region": "Occitanie", "country": "France"}}"#;
        let place = parse_reverse_response(body).unwrap();
        assert_eq!(place.state, "Occitanie");
    }

    #[test]
    fn test_missing_address_uses_unknowns() {
        let place = parse_reverse_response("{}").unwrap();
        assert_eq!(place.city, "Unknown");
        assert_eq!(place.state, "");
        assert_eq!(place.country, "Unknown");
        assert_eq!(place.country_code, "XX");
    }

    #[test]
    fn test_empty_fields_are_skipped() {
        let body = r#"{"address": {
            "city": "",
            "town": "Sehore",
            "state": "",
            "region": "Bhopal Division",
            "country": "",
            "country_code": ""
        }}"#;
        let place = parse_reverse_response(body).unwrap();
        assert_eq!(place.city, "Sehore");
        assert_eq!(place.state, "Bhopal Division");
        assert_eq!(place.country, "Unknown");
        assert_eq!(place.country_code, "XX");
    }

    #[test]
    fn test_service_error_is_malformed() {
        let err = parse_reverse_response(r#"{"error": "Unable to geocode"}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
        assert!(err.to_string().contains("Unable to geocode"));
    }

    #[test]
    fn test_non_json_body() {
        let err = parse_reverse_response("<html>busy</html>").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_client_trims_base_url() {
        let config = GeocodingConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..GeocodingConfig::default()
        };
        let client = NominatimClient::from_config(&config).unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
        assert_eq!(client.zoom, 10);
    }
}
