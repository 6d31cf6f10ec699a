//! Command-line interface for agrismart.
//!
//! Each subcommand is one view: it resolves the location (unless told which
//! country to show), looks up the regional content and prints it as text or
//! JSON.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, CoordinateArgs, CountriesCommand, JsonFlag, LocatedCommand, ProfitCommand,
    RegionalCommand, SelectCommand,
};

/// agrismart - Location-aware farming guidance
///
/// Shows climate, farming tips, crop recommendations, cold storage, weather
/// and pest forecasts for where you farm.
#[derive(Debug, Parser)]
#[command(name = "agrismart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve and show the current location
    Location(LocatedCommand),

    /// Rainfall, temperature and soil moisture for the region
    Climate(RegionalCommand),

    /// Farming tips for the region
    Tips(RegionalCommand),

    /// Recommended crops for the region
    Crops(RegionalCommand),

    /// Nearby cold storage facilities
    Storage(RegionalCommand),

    /// Search the country catalog
    Countries(CountriesCommand),

    /// Pick a country and region manually
    Select(SelectCommand),

    /// Current weather conditions
    Weather(LocatedCommand),

    /// Pest and disease risk from current weather
    Pests(LocatedCommand),

    /// Estimate season profit from costs and yield
    Profit(ProfitCommand),

    /// Sustainability metrics and overall score
    Sustainability(JsonFlag),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Command {
    /// Whether this command needs startup location resolution.
    #[must_use]
    pub fn needs_location(&self) -> bool {
        match self {
            Self::Location(_) | Self::Weather(_) | Self::Pests(_) => true,
            Self::Climate(cmd) | Self::Tips(cmd) | Self::Crops(cmd) | Self::Storage(cmd) => {
                cmd.country.is_none()
            }
            Self::Countries(_)
            | Self::Select(_)
            | Self::Profit(_)
            | Self::Sustainability(_)
            | Self::Config(_) => false,
        }
    }

    /// Coordinates given on the command line, if any.
    #[must_use]
    pub fn coordinates(&self) -> CoordinateArgs {
        match self {
            Self::Location(cmd) | Self::Weather(cmd) | Self::Pests(cmd) => cmd.coords,
            Self::Climate(cmd) | Self::Tips(cmd) | Self::Crops(cmd) | Self::Storage(cmd) => {
                cmd.coords
            }
            _ => CoordinateArgs::default(),
        }
    }
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn sustainability() -> Command {
        Command::Sustainability(JsonFlag { json: false })
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "agrismart");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_quiet() {
        let cli = Cli {
            config: None,
            verbose: 0,
            quiet: true,
            command: sustainability(),
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_levels() {
        for (verbose, expected) in [
            (0, crate::logging::Verbosity::Normal),
            (1, crate::logging::Verbosity::Verbose),
            (2, crate::logging::Verbosity::Trace),
        ] {
            let cli = Cli {
                config: None,
                verbose,
                quiet: false,
                command: sustainability(),
            };
            assert_eq!(cli.verbosity(), expected);
        }
    }

    #[test]
    fn test_parse_climate_with_country() {
        let cli = Cli::try_parse_from(["agrismart", "climate", "--country", "us", "--json"]).unwrap();
        let Command::Climate(cmd) = &cli.command else {
            panic!("expected climate command");
        };
        assert_eq!(cmd.country.as_deref(), Some("us"));
        assert!(cmd.json);
        assert!(!cli.command.needs_location());
    }

    #[test]
    fn test_parse_tips_without_country_needs_location() {
        let cli = Cli::try_parse_from(["agrismart", "tips"]).unwrap();
        assert!(cli.command.needs_location());
    }

    #[test]
    fn test_parse_negative_coordinates() {
        let cli =
            Cli::try_parse_from(["agrismart", "weather", "--lat", "-33.87", "--lon", "151.21"])
                .unwrap();
        let coords = cli.command.coordinates().coordinates().unwrap();
        assert!((coords.latitude + 33.87).abs() < f64::EPSILON);
    }

    #[test]
    fn test_coordinates_out_of_range_rejected() {
        for args in [
            ["agrismart", "weather", "--lat", "91", "--lon", "0"],
            ["agrismart", "weather", "--lat", "0", "--lon", "-180.5"],
            ["agrismart", "weather", "--lat", "north", "--lon", "0"],
        ] {
            assert!(Cli::try_parse_from(args).is_err(), "{args:?}");
        }
        let edge = ["agrismart", "weather", "--lat", "-90", "--lon", "180"];
        assert!(Cli::try_parse_from(edge).is_ok());
    }

    #[test]
    fn test_lat_requires_lon() {
        assert!(Cli::try_parse_from(["agrismart", "location", "--lat", "10"]).is_err());
    }

    #[test]
    fn test_parse_select() {
        let cli = Cli::try_parse_from(["agrismart", "select", "IN", "Punjab"]).unwrap();
        let Command::Select(cmd) = cli.command else {
            panic!("expected select command");
        };
        assert_eq!(cmd.country, "IN");
        assert_eq!(cmd.region, "Punjab");
    }

    #[test]
    fn test_parse_profit_defaults() {
        let cli = Cli::try_parse_from(["agrismart", "profit", "--yield", "40"]).unwrap();
        let Command::Profit(cmd) = cli.command else {
            panic!("expected profit command");
        };
        assert!((cmd.expected_yield - 40.0).abs() < f64::EPSILON);
        assert!((cmd.seed - 2000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_countries_query() {
        let cli = Cli::try_parse_from(["agrismart", "countries", "ind"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Countries(CountriesCommand { query: Some(ref q), .. }) if q == "ind"
        ));
    }

    #[test]
    fn test_parse_with_config() {
        let cli =
            Cli::try_parse_from(["agrismart", "-c", "/custom/config.toml", "sustainability"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_config_validate() {
        let cli = Cli::try_parse_from(["agrismart", "config", "validate", "-f", "a.toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Validate { file: Some(_) })
        ));
    }

    #[test]
    fn test_parse_with_verbose() {
        let cli = Cli::try_parse_from(["agrismart", "-vv", "pests"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
