//! Coordinate sources.
//!
//! A [`Geolocator`] produces the coordinates that startup resolution
//! reverse-geocodes. On the command line the only real source is a position
//! the user supplied (flags or config); everything else is unavailable.

use crate::error::{Error, Result};

use super::Coordinates;

/// A source of the user's current coordinates.
#[async_trait::async_trait]
pub trait Geolocator: Send + Sync {
    /// Locate the user.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GeolocationUnavailable`] when there is no source.
    async fn locate(&self) -> Result<Coordinates>;
}

/// A geolocator that always reports the same position.
#[derive(Debug, Clone, Copy)]
pub struct FixedGeolocator {
    coordinates: Coordinates,
}

impl FixedGeolocator {
    /// Create a geolocator for `coordinates`.
    #[must_use]
    pub fn new(coordinates: Coordinates) -> Self {
        Self { coordinates }
    }
}

#[async_trait::async_trait]
impl Geolocator for FixedGeolocator {
    async fn locate(&self) -> Result<Coordinates> {
        Ok(self.coordinates)
    }
}

/// A geolocator for environments with no position source.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableGeolocator;

#[async_trait::async_trait]
impl Geolocator for UnavailableGeolocator {
    async fn locate(&self) -> Result<Coordinates> {
        Err(Error::GeolocationUnavailable)
    }
}

/// Pick a geolocator for an optional fixed position.
#[must_use]
pub fn from_coordinates(coordinates: Option<Coordinates>) -> Box<dyn Geolocator> {
    match coordinates {
        Some(coordinates) => Box::new(FixedGeolocator::new(coordinates)),
        None => Box::new(UnavailableGeolocator),
    }
}
