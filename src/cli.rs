use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hourcast", version, about = "Hourly forecast grouped by day")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the forecast grouped by day as JSON (default)
    Snapshot(ForecastArgs),
    /// Print the current conditions
    Current(ForecastArgs),
    /// Print the forecast request URL for the configured location
    Url,
    /// Run interactive setup
    Init,
    /// Validate config and the saved forecast response
    Check,
}

#[derive(Args, Default)]
pub struct ForecastArgs {
    /// Saved forecast response (overrides forecast.response_file)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Reference time, e.g. 2024-06-01T14:45 (defaults to local time)
    #[arg(long, value_parser = parse_now)]
    pub now: Option<NaiveDateTime>,
}

fn parse_now(value: &str) -> Result<NaiveDateTime, String> {
    hourcast::logic::parse_timestamp(value)
        .ok_or_else(|| format!("'{}' is not an ISO-8601 date-time", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snapshot_args() {
        let cli = Cli::try_parse_from([
            "hourcast",
            "-vv",
            "snapshot",
            "--input",
            "forecast.json",
            "--now",
            "2024-06-01T14:45",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Commands::Snapshot(args)) => {
                assert_eq!(args.input, Some(PathBuf::from("forecast.json")));
                assert_eq!(
                    args.now.map(|n| n.format("%H:%M").to_string()),
                    Some("14:45".to_string())
                );
            }
            _ => panic!("expected snapshot command"),
        }
    }

    #[test]
    fn rejects_malformed_now() {
        assert!(Cli::try_parse_from(["hourcast", "current", "--now", "14:45"]).is_err());
    }

    #[test]
    fn command_is_optional() {
        let cli = Cli::try_parse_from(["hourcast"]).unwrap();
        assert!(cli.command.is_none());
    }
}
