//! `agrismart` - CLI for location-aware farming guidance
//!
//! Resolves where the user farms, then renders the regional content views.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use agrismart::cli::{Cli, Command, ConfigCommand, LocatedCommand, RegionalCommand};
use agrismart::location::{geolocation, Coordinates, NominatimClient, ReverseGeocoder};
use agrismart::weather::{OpenWeatherClient, WeatherConditions, WeatherProvider, WeatherReport};
use agrismart::{
    calculator, init_logging, pest, picker, view, Config, LocationContext, LocationStore,
    Resolver,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("failed to load configuration")?;
    let resolver = Resolver::new(config.fallback_policy());
    let store = LocationStore::new(config.default_location());

    if cli.command.needs_location() {
        let flags = cli.command.coordinates().coordinates();
        resolve_location(&config, &store, flags).await;
    }

    match &cli.command {
        Command::Location(cmd) => handle_location(&store, &resolver, cmd),
        Command::Climate(cmd) => handle_climate(&store, &resolver, cmd),
        Command::Tips(cmd) => handle_tips(&store, &resolver, cmd),
        Command::Crops(cmd) => handle_crops(&store, &resolver, cmd),
        Command::Storage(cmd) => handle_storage(&store, &resolver, cmd),
        Command::Countries(cmd) => {
            let matches = picker::search(cmd.query.as_deref().unwrap_or_default());
            if cmd.json {
                print_json(&matches)
            } else {
                print!("{}", view::countries(&matches));
                Ok(())
            }
        }
        Command::Select(cmd) => {
            store.set(picker::select_region(&cmd.country, &cmd.region));
            handle_selected(&store, &resolver, cmd.json)
        }
        Command::Weather(cmd) => handle_weather(&config, &store, cmd).await,
        Command::Pests(cmd) => handle_pests(&config, &store, cmd).await,
        Command::Profit(cmd) => {
            let summary = calculator::ProfitInputs::from(cmd).summarize();
            if cmd.json {
                print_json(&summary)
            } else {
                print!("{}", view::profit(&summary));
                Ok(())
            }
        }
        Command::Sustainability(cmd) => {
            if cmd.json {
                print_json(&serde_json::json!({
                    "overall_score": calculator::overall_score(calculator::METRICS),
                    "metrics": calculator::METRICS,
                }))
            } else {
                print!("{}", view::sustainability(calculator::METRICS));
                Ok(())
            }
        }
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

/// Run the one-shot startup resolution. Never fails; see [`LocationStore::resolve`].
async fn resolve_location(config: &Config, store: &LocationStore, flags: Option<Coordinates>) {
    let geolocator = geolocation::from_coordinates(flags.or_else(|| config.fixed_coordinates()));

    let geocoder = if config.geocoding.enabled {
        match NominatimClient::from_config(&config.geocoding) {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::warn!(error = %err, "reverse geocoding unavailable");
                None
            }
        }
    } else {
        None
    };

    store
        .resolve(
            geolocator.as_ref(),
            geocoder.as_ref().map(|client| client as &dyn ReverseGeocoder),
        )
        .await;
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Country code and preferred sub-region for a regional view.
///
/// An explicit `--country` wins over the resolved location; the location's
/// state is only used as the sub-region when the country also came from it.
fn regional_target<'a>(
    cmd: &'a RegionalCommand,
    context: &'a LocationContext,
) -> (&'a str, Option<&'a str>) {
    match &cmd.country {
        Some(country) => (country.as_str(), cmd.region.as_deref()),
        None => (
            context.country_code.as_str(),
            cmd.region
                .as_deref()
                .or(Some(context.state.as_str()).filter(|s| !s.is_empty())),
        ),
    }
}

fn handle_location(
    store: &LocationStore,
    resolver: &Resolver,
    cmd: &LocatedCommand,
) -> anyhow::Result<()> {
    let context = store.snapshot();
    if cmd.json {
        print_json(&context)
    } else {
        print!("{}", view::location(&context, resolver));
        Ok(())
    }
}

fn handle_climate(
    store: &LocationStore,
    resolver: &Resolver,
    cmd: &RegionalCommand,
) -> anyhow::Result<()> {
    let context = store.snapshot();
    let (code, region) = regional_target(cmd, &context);
    let profile = resolver.resolve_climate(code);
    if cmd.json {
        print_json(&view::Regional::new(resolver, code, region, profile))
    } else {
        let heading = view::profile_heading(resolver, "Climate", code);
        print!("{}", view::climate(&heading, profile));
        Ok(())
    }
}

fn handle_tips(
    store: &LocationStore,
    resolver: &Resolver,
    cmd: &RegionalCommand,
) -> anyhow::Result<()> {
    let context = store.snapshot();
    let (code, region) = regional_target(cmd, &context);
    let tips = resolver.resolve_tips(code, region);
    if cmd.json {
        print_json(&view::Regional::new(resolver, code, region, tips))
    } else {
        let heading = view::profile_heading(resolver, "Farming tips", code);
        print!("{}", view::tips(&heading, tips));
        Ok(())
    }
}

fn handle_crops(
    store: &LocationStore,
    resolver: &Resolver,
    cmd: &RegionalCommand,
) -> anyhow::Result<()> {
    let context = store.snapshot();
    let (code, region) = regional_target(cmd, &context);
    let crops = resolver.resolve_crops(code);
    if cmd.json {
        print_json(&view::Regional::new(resolver, code, region, crops))
    } else {
        let heading = view::profile_heading(resolver, "Recommended crops", code);
        print!("{}", view::crops(&heading, crops));
        Ok(())
    }
}

fn handle_storage(
    store: &LocationStore,
    resolver: &Resolver,
    cmd: &RegionalCommand,
) -> anyhow::Result<()> {
    let context = store.snapshot();
    let (code, region) = regional_target(cmd, &context);
    let facilities = resolver.resolve_cold_storage(code, region);
    if cmd.json {
        print_json(&view::Regional::new(resolver, code, region, &facilities))
    } else {
        let heading = view::profile_heading(resolver, "Cold storage", code);
        print!("{}", view::cold_storage(&heading, &facilities));
        Ok(())
    }
}

fn handle_selected(store: &LocationStore, resolver: &Resolver, json: bool) -> anyhow::Result<()> {
    let context = store.snapshot();
    let profile = resolver.resolve_climate(&context.country_code);
    if json {
        print_json(&serde_json::json!({
            "location": context,
            "climate": view::Regional::new(resolver, &context.country_code, None, profile),
        }))
    } else {
        print!("{}", view::location(&context, resolver));
        println!();
        let heading = view::profile_heading(resolver, "Climate", &context.country_code);
        print!("{}", view::climate(&heading, profile));
        Ok(())
    }
}

/// Fetch current weather for the resolved location, logging any failure.
async fn fetch_weather(config: &Config, store: &LocationStore) -> Option<WeatherReport> {
    let client = match OpenWeatherClient::from_config(&config.weather) {
        Ok(client) => client,
        Err(err) => {
            tracing::warn!(error = %err, "weather client unavailable");
            return None;
        }
    };
    match client.current(store.snapshot().coordinates()).await {
        Ok(report) => Some(report),
        Err(err) => {
            tracing::warn!(error = %err, "weather lookup failed");
            None
        }
    }
}

async fn handle_weather(
    config: &Config,
    store: &LocationStore,
    cmd: &LocatedCommand,
) -> anyhow::Result<()> {
    let report = fetch_weather(config, store).await;
    if cmd.json {
        print_json(&report)
    } else {
        print!("{}", view::weather(report.as_ref()));
        Ok(())
    }
}

async fn handle_pests(
    config: &Config,
    store: &LocationStore,
    cmd: &LocatedCommand,
) -> anyhow::Result<()> {
    let report = fetch_weather(config, store).await;
    let live = report.is_some();
    let conditions = report
        .as_ref()
        .map_or_else(WeatherConditions::default, WeatherReport::conditions);
    let risks = pest::assess(&conditions);

    if cmd.json {
        print_json(&serde_json::json!({
            "live": live,
            "conditions": conditions,
            "summary": pest::RiskSummary::of(&risks),
            "risks": risks,
        }))
    } else {
        print!("{}", view::pests(&risks, live));
        Ok(())
    }
}

fn handle_config(config: &Config, cmd: &ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if *json {
                print_json(&config.redacted())?;
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Location]");
                println!("  Default:            {}", config.default_location().display_name());
                match config.fixed_coordinates() {
                    Some(coordinates) => println!("  Fixed coordinates:  {coordinates}"),
                    None => println!("  Fixed coordinates:  (none)"),
                }
                println!();
                println!("[Geocoding]");
                println!("  Enabled:            {}", config.geocoding.enabled);
                println!("  Base URL:           {}", config.geocoding.base_url);
                println!("  Zoom:               {}", config.geocoding.zoom);
                println!("  Timeout (s):        {}", config.geocoding.timeout_secs);
                println!();
                println!("[Weather]");
                println!("  Base URL:           {}", config.weather.base_url);
                println!(
                    "  API key:            {}",
                    if config.weather.api_key.is_some() { "set" } else { "not set" }
                );
                println!("  Timeout (s):        {}", config.weather.timeout_secs);
                println!();
                println!("[Resolver]");
                println!("  Fallback country:   {}", config.fallback_policy().country());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.clone().unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_strict(&path) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
