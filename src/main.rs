mod cli;

use anyhow::{bail, Context};
use chrono::Local;
use clap::Parser;
use cli::{Cli, Commands, ForecastArgs};
use hourcast::app::WeatherLoader;
use hourcast::config::Config;
use hourcast::datasources::{FileWeatherRepository, ForecastRequest, WeatherRepository};
use hourcast::location::{Coordinates, FixedLocationTracker};
use hourcast::models::WeatherSnapshot;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Init) => {
            Config::setup_interactive()?;
        }
        Some(Commands::Check) => {
            let config = Config::load(cli.config.clone()).context("Configuration error")?;
            println!("Config OK: {:?}", config.location);
            check_response(&config)?;
        }
        Some(Commands::Url) => {
            let config = load_config(&cli)?;
            let request = ForecastRequest::new(
                &config.forecast,
                config.location.latitude,
                config.location.longitude,
            );
            println!("{}", request.url());
        }
        Some(Commands::Current(ref args)) => {
            let snapshot = load_snapshot(&load_config(&cli)?, args)?;
            match snapshot.current {
                Some(record) => println!(
                    "{} (wind {} km/h, humidity {}%, pressure {} hPa)",
                    record, record.wind_speed, record.humidity, record.pressure
                ),
                None => println!("No current conditions"),
            }
        }
        Some(Commands::Snapshot(ref args)) => {
            let snapshot = load_snapshot(&load_config(&cli)?, args)?;
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        None => {
            let snapshot = load_snapshot(&load_config(&cli)?, &ForecastArgs::default())?;
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }

    Ok(())
}

/// Load the config file, falling back to defaults when none exists and no path was given
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    if cli.config.is_none() && !Config::exists(None) {
        tracing::info!("No config file found, using defaults");
        return Ok(Config::default());
    }
    Config::load(cli.config.clone()).context("Configuration error")
}

fn load_snapshot(config: &Config, args: &ForecastArgs) -> anyhow::Result<WeatherSnapshot> {
    let Some(path) = args
        .input
        .clone()
        .or_else(|| config.forecast.response_file.clone())
    else {
        bail!("No forecast response given; pass --input or set forecast.response_file");
    };

    let now = args.now.unwrap_or_else(|| Local::now().naive_local());
    let mut loader = WeatherLoader::new(
        FileWeatherRepository::new(path),
        FixedLocationTracker::new(Coordinates::from(&config.location)),
    );

    let state = loader.load_weather_info(now);
    if let Some(ref error) = state.error {
        bail!("{}", error);
    }

    Ok(state.weather_info.clone().unwrap_or_default())
}

fn check_response(config: &Config) -> anyhow::Result<()> {
    let Some(ref path) = config.forecast.response_file else {
        println!("No forecast.response_file configured");
        return Ok(());
    };

    let repository = FileWeatherRepository::new(path);
    let snapshot = repository
        .get_weather_data(
            config.location.latitude,
            config.location.longitude,
            Local::now().naive_local(),
        )
        .with_context(|| format!("Forecast response {} is invalid", path.display()))?;

    println!(
        "Forecast response OK: {} hours over {} days",
        snapshot.hour_count(),
        snapshot.day_count()
    );
    Ok(())
}
