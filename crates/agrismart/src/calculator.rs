//! Farm economics and sustainability scoring.

use serde::{Deserialize, Serialize};

/// Per-season inputs for the profit calculator.
///
/// Costs are in local currency, yield in quintals and price per quintal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitInputs {
    /// Seed cost.
    pub seed_cost: f64,
    /// Fertilizer cost.
    pub fertilizer_cost: f64,
    /// Labor cost.
    pub labor_cost: f64,
    /// Irrigation cost.
    pub irrigation_cost: f64,
    /// Expected yield in quintals.
    pub expected_yield: f64,
    /// Market price per quintal.
    pub market_price: f64,
}

impl Default for ProfitInputs {
    fn default() -> Self {
        Self {
            seed_cost: 2000.0,
            fertilizer_cost: 3000.0,
            labor_cost: 5000.0,
            irrigation_cost: 2500.0,
            expected_yield: 20.0,
            market_price: 2500.0,
        }
    }
}

/// Derived profit figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfitSummary {
    /// Sum of all costs.
    pub total_cost: f64,
    /// Yield times price.
    pub gross_revenue: f64,
    /// Revenue less costs. May be negative.
    pub net_profit: f64,
    /// Return on investment in percent, one decimal.
    pub roi_percent: f64,
    /// Whole-unit cost per quintal produced.
    pub cost_per_quintal: f64,
}

impl ProfitInputs {
    /// Compute the summary. Zero costs give a zero ROI and zero yield a zero
    /// cost per quintal.
    #[must_use]
    pub fn summarize(&self) -> ProfitSummary {
        let total_cost =
            self.seed_cost + self.fertilizer_cost + self.labor_cost + self.irrigation_cost;
        let gross_revenue = self.expected_yield * self.market_price;
        let net_profit = gross_revenue - total_cost;
        let roi_percent = if total_cost > 0.0 {
            (net_profit / total_cost * 1000.0).round() / 10.0
        } else {
            0.0
        };
        let cost_per_quintal = if self.expected_yield > 0.0 {
            (total_cost / self.expected_yield).round()
        } else {
            0.0
        };

        ProfitSummary {
            total_cost,
            gross_revenue,
            net_profit,
            roi_percent,
            cost_per_quintal,
        }
    }
}

/// Which way a metric has been moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Improving.
    Up,
    /// Declining.
    Down,
    /// Flat.
    Stable,
}

/// One tracked sustainability metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SustainabilityMetric {
    /// Stable identifier.
    pub id: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Current value.
    pub value: f64,
    /// Goal value; zero means lower is better.
    pub target: f64,
    /// Display unit.
    pub unit: &'static str,
    /// Recent direction.
    pub trend: Trend,
    /// Improvement advice.
    pub advice: &'static str,
}

impl SustainabilityMetric {
    /// Whether smaller values are better.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.target.abs() < f64::EPSILON
    }

    /// Value on a 0..=100 "higher is better" scale.
    #[must_use]
    pub fn score(&self) -> f64 {
        if self.is_inverted() {
            100.0 - self.value
        } else {
            self.value
        }
    }
}

/// The farm's current metrics.
pub static METRICS: &[SustainabilityMetric] = &[
    SustainabilityMetric {
        id: "organic",
        label: "Organic Inputs",
        value: 72.0,
        target: 100.0,
        unit: "%",
        trend: Trend::Up,
        advice: "Increase organic inputs by using more compost and bio-fertilizers.",
    },
    SustainabilityMetric {
        id: "water",
        label: "Water Efficiency",
        value: 85.0,
        target: 100.0,
        unit: "%",
        trend: Trend::Up,
        advice: "Great water efficiency! Consider mulching to reduce evaporation further.",
    },
    SustainabilityMetric {
        id: "soil",
        label: "Soil Health Score",
        value: 68.0,
        target: 100.0,
        unit: "/100",
        trend: Trend::Stable,
        advice: "Add more organic matter and practice cover cropping to improve soil health.",
    },
    SustainabilityMetric {
        id: "carbon",
        label: "Carbon Footprint",
        value: 34.0,
        target: 0.0,
        unit: "t CO₂",
        trend: Trend::Down,
        advice: "Reducing tillage and planting more trees can lower carbon footprint.",
    },
];

/// Rounded mean of the metric scores. Empty input scores zero.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn overall_score(metrics: &[SustainabilityMetric]) -> u8 {
    if metrics.is_empty() {
        return 0;
    }
    let mean = metrics.iter().map(SustainabilityMetric::score).sum::<f64>() / metrics.len() as f64;
    mean.round().clamp(0.0, 100.0) as u8
}

/// Verdict line under the overall score.
#[must_use]
pub fn score_verdict(score: u8) -> &'static str {
    match score {
        80.. => "Excellent! Keep up the great work.",
        60..=79 => "Good progress. Room for improvement.",
        _ => "Let's work on improving your sustainability.",
    }
}

/// Filled fraction of a progress ring, capped at one.
///
/// A zero `max` yields zero.
#[must_use]
pub fn ring_fraction(value: f64, max: f64) -> f64 {
    if max.abs() < f64::EPSILON {
        return 0.0;
    }
    (value / max).min(1.0)
}
