//! Static regional content.
//!
//! One table per kind of content, keyed by [`Country`]. The lookups here are
//! exhaustive over `Country`; fallback for unknown codes lives in
//! [`crate::region::Resolver`].

mod climate;
mod crops;
mod storage;
mod tips;

use serde::Serialize;

use crate::region::Country;

/// Actual against optimal rainfall for one sub-region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RainfallEntry {
    /// Sub-region label.
    pub region: &'static str,
    /// Seasonal rainfall in millimetres.
    pub rainfall_mm: u32,
    /// Optimal rainfall for the main crops, in millimetres.
    pub optimal_mm: u32,
}

impl RainfallEntry {
    /// Whether this sub-region received less rain than its optimum.
    #[must_use]
    pub fn is_below_optimal(&self) -> bool {
        self.rainfall_mm < self.optimal_mm
    }
}

/// Average day and night temperature for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemperatureEntry {
    /// Short month name.
    pub month: &'static str,
    /// Daytime average in °C.
    pub day_c: i32,
    /// Night-time average in °C.
    pub night_c: i32,
}

/// Soil moisture for one week of the season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoistureEntry {
    /// Week label (`W1`..).
    pub week: &'static str,
    /// Volumetric soil moisture in percent.
    pub moisture_percent: u32,
}

/// The three climate charts for a country.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ClimateProfile {
    /// Rainfall by sub-region.
    pub rainfall: &'static [RainfallEntry],
    /// Temperature by month.
    pub temperature: &'static [TemperatureEntry],
    /// Soil moisture trend by week.
    pub moisture: &'static [MoistureEntry],
}

impl ClimateProfile {
    /// Change in soil moisture between the first and last week, in points.
    #[must_use]
    pub fn moisture_trend(&self) -> i64 {
        match (self.moisture.first(), self.moisture.last()) {
            (Some(first), Some(last)) => {
                i64::from(last.moisture_percent) - i64::from(first.moisture_percent)
            }
            _ => 0,
        }
    }
}

/// A titled group of farming tips.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct TipCategory {
    /// Stable identifier (`climate`, `soil-prep`, ...).
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// The tips themselves.
    pub tips: &'static [&'static str],
}

/// A crop suited to the current season.
#[derive(Debug, PartialEq, Serialize)]
pub struct CropRecommendation {
    /// Crop name.
    pub name: &'static str,
    /// Sowing season.
    pub season: &'static str,
    /// Water requirement label.
    pub water_needs: &'static str,
    /// Preferred temperature range.
    pub temperature: &'static str,
    /// Days to harvest.
    pub duration: &'static str,
    /// Suitability rating out of 5.
    pub rating: f32,
    /// Short growing tips.
    pub tips: &'static [&'static str],
}

/// A temperature-controlled storage facility.
#[derive(Debug, PartialEq, Serialize)]
pub struct ColdStorageFacility {
    /// Operator or facility name.
    pub name: &'static str,
    /// City the facility is in.
    pub city: &'static str,
    /// State or province, used for sub-region ordering.
    pub region: &'static str,
    /// Distance from the regional hub.
    pub distance: &'static str,
    /// Price band.
    pub cost: &'static str,
    /// Storage capacity.
    pub capacity: &'static str,
    /// Phone number.
    pub contact: &'static str,
    /// Opening hours.
    pub hours: &'static str,
    /// Average rating out of 5.
    pub rating: f32,
}

/// Climate charts for `country`.
#[must_use]
pub fn climate(country: Country) -> &'static ClimateProfile {
    match country {
        Country::India => &climate::INDIA,
        Country::UnitedStates => &climate::UNITED_STATES,
        Country::China => &climate::CHINA,
    }
}

/// Farming tips for `country`.
#[must_use]
pub fn tips(country: Country) -> &'static [TipCategory] {
    match country {
        Country::India => tips::INDIA,
        Country::UnitedStates => tips::UNITED_STATES,
        Country::China => tips::CHINA,
    }
}

/// Seasonal crops for `country`.
#[must_use]
pub fn crops(country: Country) -> &'static [CropRecommendation] {
    match country {
        Country::India => crops::INDIA,
        Country::UnitedStates => crops::UNITED_STATES,
        Country::China => crops::CHINA,
    }
}

/// Cold-storage directory for `country`.
#[must_use]
pub fn cold_storage(country: Country) -> &'static [ColdStorageFacility] {
    match country {
        Country::India => storage::INDIA,
        Country::UnitedStates => storage::UNITED_STATES,
        Country::China => storage::CHINA,
    }
}
