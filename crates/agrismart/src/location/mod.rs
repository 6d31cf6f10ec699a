//! The user's geographic context and the store that owns it.
//!
//! [`LocationStore`] is the single writer of the current [`LocationContext`].
//! Views read snapshots or subscribe for changes; the context is written once
//! by [`LocationStore::resolve`] and afterwards only by explicit selection via
//! [`LocationStore::set`].
//!
//! Resolution never fails from the caller's point of view. A missing coordinate
//! source is logged and the defaults stay in place. A failed reverse-geocode
//! lookup is logged and only the coordinates move. Either way `loading` is
//! cleared.

pub mod geocode;
pub mod geolocation;

use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::error::Error;

pub use geocode::{NominatimClient, Place, ReverseGeocoder};
pub use geolocation::{FixedGeolocator, Geolocator, UnavailableGeolocator};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl Coordinates {
    /// Valid latitudes in degrees.
    pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
    /// Valid longitudes in degrees.
    pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

    /// Create a coordinate pair.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// The user's resolved geographic context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationContext {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// City, town, or picked region name.
    pub city: String,
    /// State or region; may be empty.
    pub state: String,
    /// Country name.
    pub country: String,
    /// Upper-case ISO 3166-1 alpha-2 code, or `XX` when unknown.
    pub country_code: String,
    /// True until the startup resolution attempt has finished.
    pub loading: bool,
}

impl Default for LocationContext {
    fn default() -> Self {
        Self {
            latitude: 23.2599,
            longitude: 77.4126,
            city: "Bhopal".to_string(),
            state: "Madhya Pradesh".to_string(),
            country: "India".to_string(),
            country_code: "IN".to_string(),
            loading: true,
        }
    }
}

impl LocationContext {
    /// Build a resolved context from coordinates and a geocoded place.
    #[must_use]
    pub fn located(coordinates: Coordinates, place: Place) -> Self {
        Self {
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            city: place.city,
            state: place.state,
            country: place.country,
            country_code: place.country_code,
            loading: false,
        }
    }

    /// The coordinates of this context.
    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// "City, Country" for headings.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

/// Owner of the current [`LocationContext`].
///
/// Subscribers receive a [`watch::Receiver`]; every write through the store
/// marks the value as changed for all of them.
#[derive(Debug)]
pub struct LocationStore {
    tx: watch::Sender<LocationContext>,
    resolve_started: AtomicBool,
}

impl Default for LocationStore {
    fn default() -> Self {
        Self::new(LocationContext::default())
    }
}

impl LocationStore {
    /// Create a store holding `initial`.
    #[must_use]
    pub fn new(initial: LocationContext) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            tx,
            resolve_started: AtomicBool::new(false),
        }
    }

    /// A copy of the current context.
    #[must_use]
    pub fn snapshot(&self) -> LocationContext {
        self.tx.borrow().clone()
    }

    /// Subscribe to context changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LocationContext> {
        self.tx.subscribe()
    }

    /// Replace the context, as a manual selection does.
    ///
    /// The stored context always has `loading` cleared.
    pub fn set(&self, mut context: LocationContext) {
        context.loading = false;
        tracing::info!(
            city = %context.city,
            country_code = %context.country_code,
            "location set"
        );
        self.tx.send_replace(context);
    }

    /// Edit the context in place and notify subscribers.
    pub fn update(&self, f: impl FnOnce(&mut LocationContext)) {
        self.tx.send_modify(f);
    }

    /// Resolve the context from a coordinate source and reverse geocoding.
    ///
    /// Runs at most once per store; later calls return the current snapshot
    /// without doing anything. With no geocoder, or when the lookup fails, the
    /// coordinates are stored and the place names stay as they were.
    pub async fn resolve(
        &self,
        geolocator: &dyn Geolocator,
        geocoder: Option<&dyn ReverseGeocoder>,
    ) -> LocationContext {
        if self.resolve_started.swap(true, Ordering::SeqCst) {
            tracing::debug!("location resolution already attempted, skipping");
            return self.snapshot();
        }

        let coordinates = match geolocator.locate().await {
            Ok(coordinates) => coordinates,
            Err(err @ Error::GeolocationUnavailable) => {
                tracing::info!(error = %err, "no coordinates, keeping default location");
                self.finish_loading();
                return self.snapshot();
            }
            Err(err) => {
                tracing::warn!(error = %err, "locating failed, keeping default location");
                self.finish_loading();
                return self.snapshot();
            }
        };
        tracing::debug!(%coordinates, "coordinates resolved");

        let Some(geocoder) = geocoder else {
            self.store_coordinates(coordinates);
            return self.snapshot();
        };

        match geocoder.reverse(coordinates).await {
            Ok(place) => {
                tracing::info!(
                    city = %place.city,
                    country_code = %place.country_code,
                    "location resolved"
                );
                self.tx
                    .send_replace(LocationContext::located(coordinates, place));
            }
            Err(err) => {
                tracing::warn!(error = %err, "reverse geocoding failed, keeping place names");
                self.store_coordinates(coordinates);
            }
        }
        self.snapshot()
    }

    /// Keep the place names, move to `coordinates`, and clear `loading`.
    fn store_coordinates(&self, coordinates: Coordinates) {
        self.update(|ctx| {
            ctx.latitude = coordinates.latitude;
            ctx.longitude = coordinates.longitude;
            ctx.loading = false;
        });
    }

    fn finish_loading(&self) {
        self.update(|ctx| ctx.loading = false);
    }
}
