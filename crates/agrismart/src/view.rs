//! Text rendering of resolved content.
//!
//! Every function here is pure: it takes already-resolved data and returns the
//! text the CLI prints. JSON output serializes the same data through
//! [`Regional`] instead.

use std::fmt::Write as _;

use serde::Serialize;

use crate::calculator::{self, ProfitSummary, SustainabilityMetric};
use crate::content::{ClimateProfile, ColdStorageFacility, CropRecommendation, TipCategory};
use crate::location::LocationContext;
use crate::pest::{PestRisk, RiskSummary};
use crate::picker::CountryEntry;
use crate::region::{ProfileKey, Resolver};
use crate::weather::WeatherReport;

/// Placeholder for values that could not be fetched.
pub const PLACEHOLDER: &str = "--";

/// Regional content together with how it was resolved.
#[derive(Debug, Serialize)]
pub struct Regional<'a, T: Serialize + ?Sized> {
    /// The code that was asked for.
    pub requested: String,
    /// The code whose profile is shown.
    pub resolved: &'static str,
    /// Whether `resolved` came from the fallback policy.
    pub fallback: bool,
    /// Preferred sub-region, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<&'a str>,
    /// The content.
    pub content: &'a T,
}

impl<'a, T: Serialize + ?Sized> Regional<'a, T> {
    /// Wrap `content` resolved for `requested`.
    pub fn new(
        resolver: &Resolver,
        requested: &str,
        region: Option<&'a str>,
        content: &'a T,
    ) -> Self {
        Self {
            requested: requested.trim().to_ascii_uppercase(),
            resolved: resolver.country_for(requested).code(),
            fallback: resolver.profile_key(requested).is_fallback(),
            region,
            content,
        }
    }
}

/// Heading line naming the profile shown for `code`.
#[must_use]
pub fn profile_heading(resolver: &Resolver, title: &str, code: &str) -> String {
    let country = resolver.country_for(code);
    match resolver.profile_key(code) {
        ProfileKey::Known(_) => format!("{title}: {}", country.name()),
        ProfileKey::Fallback => format!(
            "{title}: {} (no profile for {}, showing fallback)",
            country.name(),
            code.trim().to_ascii_uppercase()
        ),
    }
}

/// The location card.
#[must_use]
pub fn location(context: &LocationContext, resolver: &Resolver) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", context.display_name());
    if !context.state.is_empty() {
        let _ = writeln!(out, "  State:       {}", context.state);
    }
    let _ = writeln!(out, "  Country:     {} ({})", context.country, context.country_code);
    let _ = writeln!(out, "  Coordinates: {}", context.coordinates());
    let _ = writeln!(
        out,
        "  Profile:     {}",
        resolver.country_for(&context.country_code).name()
    );
    if context.loading {
        let _ = writeln!(out, "  (still resolving)");
    }
    out
}

/// Rainfall, temperature and moisture charts as tables.
#[must_use]
pub fn climate(heading: &str, profile: &ClimateProfile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{heading}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Rainfall (mm)          actual  optimal");
    for entry in profile.rainfall {
        let marker = if entry.is_below_optimal() {
            "  below optimal"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "  {:<20} {:>6}  {:>7}{marker}",
            entry.region, entry.rainfall_mm, entry.optimal_mm
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Temperature (°C)       day  night");
    for entry in profile.temperature {
        let _ = writeln!(
            out,
            "  {:<20} {:>3}  {:>5}",
            entry.month, entry.day_c, entry.night_c
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Soil moisture (%)");
    for entry in profile.moisture {
        let _ = writeln!(out, "  {:<20} {:>3}", entry.week, entry.moisture_percent);
    }
    let trend = profile.moisture_trend();
    let _ = writeln!(out, "  Trend: {trend:+} points over {} weeks", profile.moisture.len());
    out
}

/// Tip categories as bulleted lists.
#[must_use]
pub fn tips(heading: &str, categories: &[TipCategory]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{heading}");
    for category in categories {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", category.title);
        for tip in category.tips {
            let _ = writeln!(out, "  - {tip}");
        }
    }
    out
}

/// Crop recommendation cards.
#[must_use]
pub fn crops(heading: &str, crops: &[CropRecommendation]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{heading}");
    for crop in crops {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({:.1}/5)", crop.name, crop.rating);
        let _ = writeln!(out, "  Season:      {}", crop.season);
        let _ = writeln!(out, "  Water:       {}", crop.water_needs);
        let _ = writeln!(out, "  Temperature: {}", crop.temperature);
        let _ = writeln!(out, "  Duration:    {}", crop.duration);
        for tip in crop.tips {
            let _ = writeln!(out, "  - {tip}");
        }
    }
    out
}

/// Cold storage directory.
#[must_use]
pub fn cold_storage(heading: &str, facilities: &[&ColdStorageFacility]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{heading}");
    for facility in facilities {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} ({:.1}/5), {}, {}",
            facility.name, facility.rating, facility.city, facility.region
        );
        let _ = writeln!(out, "  Distance: {}", facility.distance);
        let _ = writeln!(out, "  Cost:     {}", facility.cost);
        let _ = writeln!(out, "  Capacity: {}", facility.capacity);
        let _ = writeln!(out, "  Hours:    {}", facility.hours);
        let _ = writeln!(out, "  Contact:  {}", facility.contact);
    }
    out
}

/// Country search results, one per line.
#[must_use]
pub fn countries(entries: &[&CountryEntry]) -> String {
    if entries.is_empty() {
        return "No matching countries.\n".to_string();
    }
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "{}  {:<24} {}", entry.code, entry.name, entry.regions.join(", "));
    }
    out
}

/// Weather card, or placeholders when the lookup failed.
#[must_use]
pub fn weather(report: Option<&WeatherReport>) -> String {
    let mut out = String::new();
    let Some(report) = report else {
        let _ = writeln!(out, "Weather unavailable");
        let _ = writeln!(out, "  Temperature: {PLACEHOLDER}");
        let _ = writeln!(out, "  Humidity:    {PLACEHOLDER}");
        let _ = writeln!(out, "  Wind:        {PLACEHOLDER}");
        let _ = writeln!(out, "  Rain (1h):   {PLACEHOLDER}");
        return out;
    };

    let place = match (report.city.is_empty(), report.country.is_empty()) {
        (false, false) => format!("{}, {}", report.city, report.country),
        (false, true) => report.city.clone(),
        _ => "Current location".to_string(),
    };
    let _ = writeln!(out, "{place}: {}", report.condition);
    let _ = writeln!(
        out,
        "  Temperature: {}°C (feels like {}°C)",
        report.temperature_c, report.feels_like_c
    );
    let _ = writeln!(
        out,
        "  Humidity:    {}% ({})",
        report.humidity_percent,
        report.humidity_label()
    );
    let _ = writeln!(out, "  Wind:        {} km/h ({})", report.wind_kmh, report.wind_label());
    let _ = writeln!(out, "  Rain (1h):   {} mm", report.rain_1h_mm);
    let _ = writeln!(
        out,
        "  Observed:    {}",
        report.observed_at.format("%Y-%m-%d %H:%M UTC")
    );
    out
}

/// Pest risk list with its summary line.
#[must_use]
pub fn pests(risks: &[PestRisk], live: bool) -> String {
    let mut out = String::new();
    let summary = RiskSummary::of(risks);
    let _ = writeln!(
        out,
        "Pest & disease forecast ({} high, {} medium)",
        summary.high, summary.medium
    );
    if !live {
        let _ = writeln!(out, "Live weather unavailable, using typical conditions.");
    }
    for risk in risks {
        let _ = writeln!(out);
        let _ = writeln!(out, "{:<16} {:>3}%  {}", risk.name, risk.percent, risk.level);
        let _ = writeln!(out, "  Affects: {}", risk.affected_crops.join(", "));
        let _ = writeln!(out, "  Tip:     {}", risk.tip);
    }
    out
}

/// Profit calculator results.
#[must_use]
pub fn profit(summary: &ProfitSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total cost:        {:.0}", summary.total_cost);
    let _ = writeln!(out, "Gross revenue:     {:.0}", summary.gross_revenue);
    let _ = writeln!(out, "Net profit:        {:.0}", summary.net_profit);
    let _ = writeln!(out, "ROI:               {:.1}%", summary.roi_percent);
    let _ = writeln!(out, "Cost per quintal:  {:.0}", summary.cost_per_quintal);
    out
}

/// Sustainability metrics and the overall score.
#[must_use]
pub fn sustainability(metrics: &[SustainabilityMetric]) -> String {
    let mut out = String::new();
    let score = calculator::overall_score(metrics);
    let _ = writeln!(out, "Overall sustainability score: {score}/100");
    let _ = writeln!(out, "{}", calculator::score_verdict(score));
    for metric in metrics {
        let percent = calculator::ring_fraction(metric.score(), 100.0) * 100.0;
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{:<18} {}{} ({percent:.0}% of goal)",
            metric.label, metric.value, metric.unit
        );
        let _ = writeln!(out, "  {}", metric.advice);
    }
    out
}
