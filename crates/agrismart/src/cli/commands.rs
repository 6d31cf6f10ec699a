//! CLI command definitions.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::calculator::ProfitInputs;
use crate::location::Coordinates;

/// Coordinates supplied on the command line.
///
/// When present they are the coordinate source for location resolution,
/// taking precedence over `[location]` in the config file.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct CoordinateArgs {
    /// Latitude to resolve instead of the configured position
    #[arg(long, requires = "lon", allow_hyphen_values = true, value_parser = parse_latitude)]
    pub lat: Option<f64>,

    /// Longitude to resolve instead of the configured position
    #[arg(long, requires = "lat", allow_hyphen_values = true, value_parser = parse_longitude)]
    pub lon: Option<f64>,
}

fn parse_latitude(s: &str) -> Result<f64, String> {
    parse_degrees(s, &Coordinates::LATITUDE_RANGE)
}

fn parse_longitude(s: &str) -> Result<f64, String> {
    parse_degrees(s, &Coordinates::LONGITUDE_RANGE)
}

fn parse_degrees(s: &str, range: &RangeInclusive<f64>) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is outside [{}, {}]", range.start(), range.end()))
    }
}

impl CoordinateArgs {
    /// The supplied coordinates, if both were given.
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }
}

/// Arguments for views that only need the resolved location.
#[derive(Debug, Args)]
pub struct LocatedCommand {
    #[command(flatten)]
    pub coords: CoordinateArgs,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Arguments for the regional content views.
#[derive(Debug, Args)]
pub struct RegionalCommand {
    /// Country code to show content for (defaults to the resolved location)
    #[arg(long, value_name = "CODE")]
    pub country: Option<String>,

    /// Sub-region (state or province) to prefer
    #[arg(long, value_name = "NAME")]
    pub region: Option<String>,

    #[command(flatten)]
    pub coords: CoordinateArgs,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Country search arguments.
#[derive(Debug, Args)]
pub struct CountriesCommand {
    /// Case-insensitive name or code fragment
    pub query: Option<String>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Manual location override.
#[derive(Debug, Args)]
pub struct SelectCommand {
    /// Country code, e.g. `IN`
    pub country: String,

    /// Region within the country, e.g. `Punjab`
    pub region: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Profit calculator inputs.
#[derive(Debug, Args)]
pub struct ProfitCommand {
    /// Seed cost
    #[arg(long, default_value_t = 2000.0)]
    pub seed: f64,

    /// Fertilizer cost
    #[arg(long, default_value_t = 3000.0)]
    pub fertilizer: f64,

    /// Labor cost
    #[arg(long, default_value_t = 5000.0)]
    pub labor: f64,

    /// Irrigation cost
    #[arg(long, default_value_t = 2500.0)]
    pub irrigation: f64,

    /// Expected yield in quintals
    #[arg(long = "yield", default_value_t = 20.0)]
    pub expected_yield: f64,

    /// Market price per quintal
    #[arg(long, default_value_t = 2500.0)]
    pub price: f64,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

impl From<&ProfitCommand> for ProfitInputs {
    fn from(cmd: &ProfitCommand) -> Self {
        Self {
            seed_cost: cmd.seed,
            fertilizer_cost: cmd.fertilizer,
            labor_cost: cmd.labor,
            irrigation_cost: cmd.irrigation,
            expected_yield: cmd.expected_yield,
            market_price: cmd.price,
        }
    }
}

/// Output-only arguments.
#[derive(Debug, Args)]
pub struct JsonFlag {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
