//! Configuration management for agrismart.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::location::{Coordinates, LocationContext};
use crate::region::{Country, FallbackPolicy};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "agrismart";

const REDACTED: &str = "********";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "AGRISMART_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `AGRISMART_`, nested keys split on `__`)
/// 2. TOML config file at `~/.config/agrismart/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default location and optional fixed coordinate source.
    pub location: LocationConfig,
    /// Reverse geocoding service.
    pub geocoding: GeocodingConfig,
    /// Weather service.
    pub weather: WeatherConfig,
    /// Regional content resolution.
    pub resolver: ResolverConfig,
}

/// Location-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    /// City shown before resolution completes.
    pub default_city: String,
    /// State or region shown before resolution completes.
    pub default_state: String,
    /// Country name shown before resolution completes.
    pub default_country: String,
    /// ISO country code used before resolution completes.
    pub default_country_code: String,
    /// Latitude of the default location.
    pub default_latitude: f64,
    /// Longitude of the default location.
    pub default_longitude: f64,
    /// Fixed latitude to resolve at startup. Unset means no coordinate source.
    pub latitude: Option<f64>,
    /// Fixed longitude to resolve at startup. Unset means no coordinate source.
    pub longitude: Option<f64>,
}

/// Reverse geocoding configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodingConfig {
    /// Whether to reverse-geocode resolved coordinates at all.
    pub enabled: bool,
    /// Base URL of the Nominatim-compatible service.
    pub base_url: String,
    /// Nominatim zoom level (10 is city granularity).
    pub zoom: u8,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// User-Agent sent with each request. Nominatim rejects anonymous clients.
    pub user_agent: String,
}

/// Weather service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Base URL of the OpenWeather-compatible API.
    pub base_url: String,
    /// API key. Weather lookups fail fast when unset.
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// Resolver configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Country whose profiles are served for unrecognized country codes.
    pub fallback_country: String,
}

impl Default for LocationConfig {
    fn default() -> Self {
        let default = LocationContext::default();
        Self {
            default_city: default.city,
            default_state: default.state,
            default_country: default.country,
            default_country_code: default.country_code,
            default_latitude: default.latitude,
            default_longitude: default.longitude,
            latitude: None,
            longitude: None,
        }
    }
}

impl GeocodingConfig {
    /// Request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl WeatherConfig {
    /// Request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            zoom: 10,
            timeout_secs: 10,
            user_agent: concat!("agrismart/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openweathermap.org/data/2.5".to_string(),
            api_key: None,
            timeout_secs: 10,
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fallback_country: Country::India.code().to_string(),
        }
    }
}

fn country_code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z]{2}$").expect("valid country code regex"))
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);
        Self::extract(Self::figment().merge(Toml::file(&config_file)))
    }

    /// Load configuration from a file that must exist.
    ///
    /// Used by `config validate`, where silently falling back to defaults
    /// would hide a typo in the path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_strict(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::extract(Self::figment().merge(Toml::string(&contents)))
    }

    fn figment() -> Figment {
        Figment::new().merge(Serialized::defaults(Config::default()))
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: Config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        for (key, code) in [
            ("location.default_country_code", &self.location.default_country_code),
            ("resolver.fallback_country", &self.resolver.fallback_country),
        ] {
            if !country_code_pattern().is_match(code) {
                return Err(invalid(format!(
                    "{key} must be a two-letter country code, got {code:?}"
                )));
            }
        }

        if Country::from_code(&self.resolver.fallback_country).is_none() {
            return Err(invalid(format!(
                "resolver.fallback_country {:?} has no content profiles",
                self.resolver.fallback_country
            )));
        }

        check_coordinates(
            "location.default",
            self.location.default_latitude,
            self.location.default_longitude,
        )?;

        match (self.location.latitude, self.location.longitude) {
            (Some(lat), Some(lon)) => check_coordinates("location", lat, lon)?,
            (None, None) => {}
            _ => {
                return Err(invalid(
                    "location.latitude and location.longitude must be set together",
                ))
            }
        }

        if self.geocoding.zoom > 18 {
            return Err(invalid(format!(
                "geocoding.zoom must be between 0 and 18, got {}",
                self.geocoding.zoom
            )));
        }

        for (key, secs) in [
            ("geocoding.timeout_secs", self.geocoding.timeout_secs),
            ("weather.timeout_secs", self.weather.timeout_secs),
        ] {
            if secs == 0 {
                return Err(invalid(format!("{key} must be greater than 0")));
            }
        }

        for (key, url) in [
            ("geocoding.base_url", &self.geocoding.base_url),
            ("weather.base_url", &self.weather.base_url),
        ] {
            if url.trim().is_empty() {
                return Err(invalid(format!("{key} must not be empty")));
            }
        }

        Ok(())
    }

    /// The location to show before (or instead of) resolution.
    #[must_use]
    pub fn default_location(&self) -> LocationContext {
        LocationContext {
            latitude: self.location.default_latitude,
            longitude: self.location.default_longitude,
            city: self.location.default_city.clone(),
            state: self.location.default_state.clone(),
            country: self.location.default_country.clone(),
            country_code: self.location.default_country_code.to_ascii_uppercase(),
            loading: true,
        }
    }

    /// Fixed coordinates to resolve at startup, if configured.
    #[must_use]
    pub fn fixed_coordinates(&self) -> Option<Coordinates> {
        match (self.location.latitude, self.location.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)),
            _ => None,
        }
    }

    /// A copy safe to print, with the weather API key masked.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.weather.api_key.is_some() {
            config.weather.api_key = Some(REDACTED.to_string());
        }
        config
    }

    /// The resolver fallback policy.
    ///
    /// Validation guarantees the configured country is known; an unvalidated
    /// config with an unknown code falls back to the default policy.
    #[must_use]
    pub fn fallback_policy(&self) -> FallbackPolicy {
        Country::from_code(&self.resolver.fallback_country)
            .map(FallbackPolicy::new)
            .unwrap_or_default()
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::ConfigValidation {
        message: message.into(),
    }
}

fn check_coordinates(key: &str, latitude: f64, longitude: f64) -> Result<()> {
    if !Coordinates::LATITUDE_RANGE.contains(&latitude) {
        return Err(invalid(format!(
            "{key} latitude must be within [-90, 90], got {latitude}"
        )));
    }
    if !Coordinates::LONGITUDE_RANGE.contains(&longitude) {
        return Err(invalid(format!(
            "{key} longitude must be within [-180, 180], got {longitude}"
        )));
    }
    Ok(())
}
