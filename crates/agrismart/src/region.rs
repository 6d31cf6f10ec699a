//! Country-code resolution for regional content.
//!
//! Content tables exist for a closed set of [`Country`] values. Every other
//! code maps to [`ProfileKey::Fallback`], which the [`Resolver`] turns into the
//! country named by its [`FallbackPolicy`]. All resolver methods are total:
//! there is no "not found" for callers to handle.

use serde::{Deserialize, Serialize};

use crate::content::{self, ClimateProfile, ColdStorageFacility, CropRecommendation, TipCategory};

/// A country with its own content profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    /// India (`IN`).
    India,
    /// United States (`US`).
    UnitedStates,
    /// China (`CN`).
    China,
}

impl Country {
    /// Every country with content, in table order.
    pub const ALL: [Country; 3] = [Self::India, Self::UnitedStates, Self::China];

    /// Parse an ISO code, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|country| country.code().eq_ignore_ascii_case(code))
    }

    /// The upper-case ISO code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::India => "IN",
            Self::UnitedStates => "US",
            Self::China => "CN",
        }
    }

    /// The English country name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::India => "India",
            Self::UnitedStates => "United States",
            Self::China => "China",
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The table key a country code resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProfileKey {
    /// The code has its own profiles.
    Known(Country),
    /// The code has no profiles; the fallback country is served.
    Fallback,
}

impl ProfileKey {
    /// Classify a country code.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        Country::from_code(code).map_or(Self::Fallback, Self::Known)
    }

    /// Whether this key is the fallback.
    #[must_use]
    pub fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback)
    }
}

/// Which country's profiles unknown codes receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackPolicy {
    country: Country,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self::new(Country::India)
    }
}

impl FallbackPolicy {
    /// Serve `country` for unknown codes.
    #[must_use]
    pub fn new(country: Country) -> Self {
        Self { country }
    }

    /// The fallback country.
    #[must_use]
    pub fn country(self) -> Country {
        self.country
    }
}

/// Total resolver from country codes to static content.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver {
    policy: FallbackPolicy,
}

impl Resolver {
    /// Create a resolver with the given fallback policy.
    #[must_use]
    pub fn new(policy: FallbackPolicy) -> Self {
        Self { policy }
    }

    /// The fallback policy in effect.
    #[must_use]
    pub fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    /// Which key `code` maps to.
    #[must_use]
    pub fn profile_key(&self, code: &str) -> ProfileKey {
        ProfileKey::from_code(code)
    }

    /// The country whose profiles are served for `code`.
    #[must_use]
    pub fn country_for(&self, code: &str) -> Country {
        match self.profile_key(code) {
            ProfileKey::Known(country) => country,
            ProfileKey::Fallback => {
                tracing::debug!(
                    code,
                    fallback = %self.policy.country,
                    "no profiles for country code, using fallback"
                );
                self.policy.country
            }
        }
    }

    /// Rainfall, temperature, and soil moisture charts.
    #[must_use]
    pub fn resolve_climate(&self, code: &str) -> &'static ClimateProfile {
        content::climate(self.country_for(code))
    }

    /// Farming tips by category.
    ///
    /// The sub-region is accepted for parity with the other lookups; tips are
    /// country-wide.
    #[must_use]
    pub fn resolve_tips(&self, code: &str, _sub_region: Option<&str>) -> &'static [TipCategory] {
        content::tips(self.country_for(code))
    }

    /// Seasonal crop recommendations.
    #[must_use]
    pub fn resolve_crops(&self, code: &str) -> &'static [CropRecommendation] {
        content::crops(self.country_for(code))
    }

    /// Cold-storage facilities, those in `sub_region` first.
    ///
    /// Ordering within each group follows the table.
    #[must_use]
    pub fn resolve_cold_storage(
        &self,
        code: &str,
        sub_region: Option<&str>,
    ) -> Vec<&'static ColdStorageFacility> {
        let mut facilities: Vec<_> = content::cold_storage(self.country_for(code))
            .iter()
            .collect();
        if let Some(sub_region) = sub_region.map(str::trim).filter(|s| !s.is_empty()) {
            // stable: keeps table order within both groups
            facilities.sort_by_key(|facility| !facility.region.eq_ignore_ascii_case(sub_region));
        }
        facilities
    }
}
