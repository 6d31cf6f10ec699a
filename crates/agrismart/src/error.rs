//! Error types for agrismart.
//!
//! Most failures in this crate are degraded to default content by the caller
//! (location resolution, weather display). The variants here exist so that the
//! degradation points can log something specific before falling back.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for agrismart operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Location Errors ===
    /// No coordinate source is available in this environment.
    #[error("geolocation unavailable")]
    GeolocationUnavailable,

    // === Remote Service Errors ===
    /// The HTTP request failed or its body could not be decoded.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A remote service answered with a non-success status.
    #[error("{service} returned status {status}: {body}")]
    Status {
        /// Which service answered.
        service: &'static str,
        /// The HTTP status code.
        status: reqwest::StatusCode,
        /// Response body, possibly empty.
        body: String,
    },

    /// A remote service answered with a body we could not use.
    #[error("unexpected response from {service}: {message}")]
    MalformedResponse {
        /// Which service answered.
        service: &'static str,
        /// What was wrong with the body.
        message: String,
    },

    /// A weather request was attempted without an API key.
    #[error("no API key configured for {service}")]
    MissingApiKey {
        /// The service that needs a key.
        service: &'static str,
    },

    // === I/O Errors ===
    /// Failed to read a file at a known path.
    #[error("failed to read {path}: {source}")]
    FileRead {
        /// Path that couldn't be read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for agrismart operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a malformed response error.
    #[must_use]
    pub fn malformed(service: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            service,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::GeolocationUnavailable;
        assert_eq!(err.to_string(), "geolocation unavailable");
    }

    #[test]
    fn test_status_error_display() {
        let err = Error::Status {
            service: "nominatim",
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            body: "try later".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("nominatim"));
        assert!(msg.contains("503"));
        assert!(msg.contains("try later"));
    }

    #[test]
    fn test_malformed_display() {
        let err = Error::malformed("openweather", "no main block");
        assert_eq!(
            err.to_string(),
            "unexpected response from openweather: no main block"
        );
    }

    #[test]
    fn test_missing_api_key_display() {
        let err = Error::MissingApiKey {
            service: "openweather",
        };
        assert_eq!(err.to_string(), "no API key configured for openweather");
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "invalid zoom".to_string(),
        };
        assert!(err.to_string().contains("invalid zoom"));
    }

    #[test]
    fn test_file_read_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::FileRead {
            path: PathBuf::from("/root/forbidden.toml"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden.toml"));
    }
}
