//! `agrismart` - Location-aware agricultural guidance
//!
//! This library resolves the user's geographic context once, keeps it in a
//! single-writer [`LocationStore`], and maps country codes to regional content
//! (climate, tips, crops, cold storage) through a total [`Resolver`]. Weather
//! lookups feed a pest-risk forecast.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod calculator;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod location;
pub mod logging;
pub mod pest;
pub mod picker;
pub mod region;
pub mod view;
pub mod weather;

pub use config::Config;
pub use error::{Error, Result};
pub use location::{Coordinates, LocationContext, LocationStore};
pub use logging::init_logging;
pub use region::{Country, FallbackPolicy, ProfileKey, Resolver};
pub use weather::{WeatherConditions, WeatherReport};
