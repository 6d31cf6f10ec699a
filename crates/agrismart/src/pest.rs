//! Weather-driven pest and disease risk.

use std::fmt;

use serde::Serialize;

use crate::weather::WeatherConditions;

/// Severity bucket for a pest risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Unlikely under current conditions.
    Low,
    /// Worth monitoring.
    Medium,
    /// Act now.
    High,
}

impl RiskLevel {
    /// Lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pest's assessed risk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PestRisk {
    /// Pest or disease name.
    pub name: &'static str,
    /// Severity bucket.
    pub level: RiskLevel,
    /// Likelihood in percent, 0..=100.
    pub percent: u8,
    /// Crops this pest usually attacks.
    pub affected_crops: &'static [&'static str],
    /// One-line control advice.
    pub tip: &'static str,
}

/// Counts shown above the risk list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskSummary {
    /// Number of high risks.
    pub high: usize,
    /// Number of medium risks.
    pub medium: usize,
}

impl RiskSummary {
    /// Count the high and medium entries in `risks`.
    #[must_use]
    pub fn of(risks: &[PestRisk]) -> Self {
        risks.iter().fold(Self::default(), |mut summary, risk| {
            match risk.level {
                RiskLevel::High => summary.high += 1,
                RiskLevel::Medium => summary.medium += 1,
                RiskLevel::Low => {}
            }
            summary
        })
    }
}

struct PestModel {
    name: &'static str,
    affected_crops: &'static [&'static str],
    tip: &'static str,
    rate: fn(&WeatherConditions) -> (RiskLevel, u8),
}

static MODELS: &[PestModel] = &[
    PestModel {
        name: "Aphids",
        affected_crops: &["Wheat", "Tomatoes", "Peppers", "Cabbage"],
        tip: "Use neem oil spray early morning or release ladybugs as natural predators.",
        rate: |w| {
            if w.temp > 15.0 && w.temp < 28.0 && w.humidity > 60.0 {
                (RiskLevel::High, 75)
            } else if w.temp > 10.0 {
                (RiskLevel::Medium, 45)
            } else {
                (RiskLevel::Low, 20)
            }
        },
    },
    PestModel {
        name: "Whiteflies",
        affected_crops: &["Tomatoes", "Cotton", "Beans", "Squash"],
        tip: "Install yellow sticky traps and maintain good air circulation.",
        rate: |w| {
            if w.temp > 25.0 && w.humidity < 70.0 {
                (RiskLevel::High, 70)
            } else if w.temp > 20.0 {
                (RiskLevel::Medium, 40)
            } else {
                (RiskLevel::Low, 15)
            }
        },
    },
    PestModel {
        name: "Fungal Diseases",
        affected_crops: &["Rice", "Potatoes", "Grapes", "Tomatoes"],
        tip: "Improve drainage, avoid overhead irrigation, apply copper-based fungicides.",
        rate: |w| {
            if w.humidity > 80.0 && w.rainfall > 10.0 {
                (RiskLevel::High, 85)
            } else if w.humidity > 65.0 {
                (RiskLevel::Medium, 50)
            } else {
                (RiskLevel::Low, 25)
            }
        },
    },
    PestModel {
        name: "Root Rot",
        affected_crops: &["Beans", "Peas", "Carrots", "Onions"],
        tip: "Ensure proper soil drainage and avoid overwatering.",
        rate: |w| {
            if w.rainfall > 20.0 && w.humidity > 75.0 {
                (RiskLevel::High, 80)
            } else if w.rainfall > 10.0 {
                (RiskLevel::Medium, 45)
            } else {
                (RiskLevel::Low, 20)
            }
        },
    },
    PestModel {
        name: "Caterpillars",
        affected_crops: &["Cabbage", "Broccoli", "Cauliflower", "Lettuce"],
        tip: "Use Bt (Bacillus thuringiensis) spray or hand-pick caterpillars.",
        // Never rated high.
        rate: |w| {
            if w.temp > 20.0 && w.temp < 30.0 {
                (RiskLevel::Medium, 55)
            } else if w.temp > 15.0 {
                (RiskLevel::Low, 30)
            } else {
                (RiskLevel::Low, 15)
            }
        },
    },
    PestModel {
        name: "Spider Mites",
        affected_crops: &["Cucumbers", "Melons", "Strawberries", "Roses"],
        tip: "Increase humidity around plants and spray with water regularly.",
        rate: |w| {
            if w.temp > 27.0 && w.humidity < 50.0 {
                (RiskLevel::High, 72)
            } else if w.temp > 22.0 {
                (RiskLevel::Medium, 42)
            } else {
                (RiskLevel::Low, 18)
            }
        },
    },
];

/// Rate every known pest against `conditions`, most likely first.
///
/// Ties keep catalog order.
#[must_use]
pub fn assess(conditions: &WeatherConditions) -> Vec<PestRisk> {
    let mut risks: Vec<PestRisk> = MODELS
        .iter()
        .map(|model| {
            let (level, percent) = (model.rate)(conditions);
            PestRisk {
                name: model.name,
                level,
                percent,
                affected_crops: model.affected_crops,
                tip: model.tip,
            }
        })
        .collect();
    risks.sort_by(|a, b| b.percent.cmp(&a.percent));
    risks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conditions(temp: f64, humidity: f64, rainfall: f64) -> WeatherConditions {
        WeatherConditions {
            temp,
            humidity,
            rainfall,
        }
    }

    fn find<'a>(risks: &'a [PestRisk], name: &str) -> &'a PestRisk {
        risks.iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_default_conditions() {
        let risks = assess(&WeatherConditions::default());
        let names: Vec<_> = risks.iter().map(|r| (r.name, r.percent)).collect();
        assert_eq!(
            names,
            vec![
                ("Caterpillars", 55),
                ("Aphids", 45),
                ("Spider Mites", 42),
                ("Whiteflies", 40),
                ("Fungal Diseases", 25),
                ("Root Rot", 20),
            ]
        );
        assert_eq!(RiskSummary::of(&risks), RiskSummary { high: 0, medium: 4 });
    }

    #[test]
    fn test_wet_humid_conditions() {
        let risks = assess(&conditions(24.0, 85.0, 25.0));
        assert_eq!(risks[0].name, "Fungal Diseases");
        assert_eq!(risks[0].level, RiskLevel::High);
        assert_eq!(find(&risks, "Root Rot").percent, 80);
        assert_eq!(find(&risks, "Aphids").level, RiskLevel::High);
        assert_eq!(find(&risks, "Spider Mites").level, RiskLevel::Medium);
        assert_eq!(RiskSummary::of(&risks).high, 3);
    }

    #[test]
    fn test_hot_dry_conditions() {
        let risks = assess(&conditions(32.0, 40.0, 0.0));
        assert_eq!(find(&risks, "Whiteflies").level, RiskLevel::High);
        assert_eq!(find(&risks, "Spider Mites").percent, 72);
        assert_eq!(find(&risks, "Caterpillars").level, RiskLevel::Low);
        assert_eq!(find(&risks, "Caterpillars").percent, 30);
        assert_eq!(find(&risks, "Aphids").percent, 45);
    }

    #[test]
    fn test_cold_conditions_are_low() {
        let risks = assess(&conditions(5.0, 50.0, 0.0));
        assert!(risks.iter().all(|r| r.level == RiskLevel::Low));
        assert_eq!(RiskSummary::of(&risks), RiskSummary::default());
    }

    #[test]
    fn test_thresholds_are_strict() {
        let risks = assess(&conditions(28.0, 61.0, 10.0));
        assert_eq!(find(&risks, "Aphids").level, RiskLevel::Medium);
        assert_eq!(find(&risks, "Root Rot").level, RiskLevel::Low);
    }

    #[test]
    fn test_sorted_descending() {
        let risks = assess(&conditions(26.0, 90.0, 15.0));
        assert!(risks.windows(2).all(|w| w[0].percent >= w[1].percent));
        assert_eq!(risks.len(), 6);
    }

    #[test]
    fn test_level_serializes_lowercase() {
        let json = serde_json::to_string(&RiskLevel::High).unwrap();
        assert_eq!(json, "\"high\"");
        assert_eq!(RiskLevel::Medium.to_string(), "medium");
    }
}
