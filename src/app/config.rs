//! Command-line configuration.
//!
//! The shell keeps nothing between runs, so the command line is the only
//! place initial values come from.

use anyhow::{bail, Context, Result};
use clap::Parser;
use dewscope::{parse_date, DateRange, InitialState, DEFAULT_LOCATION};

/// Condensation vulnerability viewer
#[derive(Debug, Clone, Parser)]
#[command(name = "dewscope-gui", version, about)]
pub struct Cli {
    /// Location to start with
    #[arg(long, default_value = DEFAULT_LOCATION)]
    pub location: String,

    /// Start in light mode
    #[arg(long)]
    pub light: bool,

    /// First day of the range (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub start: Option<String>,

    /// Last day of the range (YYYY-MM-DD), defaults to the start date
    #[arg(long)]
    pub end: Option<String>,

    /// Initial window width in points
    #[arg(long, default_value_t = 1100.0)]
    pub width: f32,

    /// Initial window height in points
    #[arg(long, default_value_t = 800.0)]
    pub height: f32,

    /// Print the initial render plan as JSON and exit
    #[arg(long)]
    pub dump_plan: bool,
}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub initial: InitialState,
    pub window_size: [f32; 2],
    pub dump_plan: bool,
}

impl AppConfig {
    /// Validates command-line values and builds the configuration.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        if !(cli.width > 0.0 && cli.height > 0.0) {
            bail!("window size must be positive, got {}x{}", cli.width, cli.height);
        }

        let date_range = match (cli.start, cli.end) {
            (None, None) => DateRange::today(),
            (Some(start), None) => {
                check_date(&start, "--start")?;
                DateRange::single_day(start)
            }
            (None, Some(end)) => {
                check_date(&end, "--end")?;
                DateRange::new(dewscope::today_string(), end)
            }
            (Some(start), Some(end)) => {
                check_date(&start, "--start")?;
                check_date(&end, "--end")?;
                DateRange::new(start, end)
            }
        };

        Ok(Self {
            initial: InitialState {
                dark_mode: !cli.light,
                location: cli.location,
                date_range,
            },
            window_size: [cli.width, cli.height],
            dump_plan: cli.dump_plan,
        })
    }
}

fn check_date(value: &str, flag: &str) -> Result<()> {
    parse_date(value)
        .map(|_| ())
        .with_context(|| format!("{} expects a YYYY-MM-DD date, got '{}'", flag, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<AppConfig> {
        let cli = Cli::try_parse_from(std::iter::once("dewscope-gui").chain(args.iter().copied()))?;
        AppConfig::from_cli(cli)
    }

    #[test]
    fn test_defaults() -> Result<()> {
        let config = parse(&[])?;
        assert!(config.initial.dark_mode);
        assert_eq!(config.initial.location, DEFAULT_LOCATION);
        assert_eq!(config.initial.date_range, DateRange::today());
        assert_eq!(config.window_size, [1100.0, 800.0]);
        assert!(!config.dump_plan);
        Ok(())
    }

    #[test]
    fn test_light_and_location() -> Result<()> {
        let config = parse(&["--light", "--location", "Boston", "--start", "2024-06-01"])?;
        assert!(!config.initial.dark_mode);
        assert_eq!(config.initial.location, "Boston");
        assert_eq!(config.initial.date_range, DateRange::single_day("2024-06-01"));
        Ok(())
    }

    #[test]
    fn test_dump_plan_flag() -> Result<()> {
        let config = parse(&["--dump-plan", "--location", "Oslo"])?;
        assert!(config.dump_plan);
        assert_eq!(config.initial.location, "Oslo");
        Ok(())
    }

    #[test]
    fn test_reversed_range_is_kept() -> Result<()> {
        let config = parse(&["--start", "2024-06-09", "--end", "2024-06-01"])?;
        assert_eq!(config.initial.date_range, DateRange::new("2024-06-09", "2024-06-01"));
        Ok(())
    }

    #[test]
    fn test_invalid_date_rejected() {
        let err = parse(&["--start", "06/01/2024"]).unwrap_err();
        assert!(err.to_string().contains("--start"));
    }

    #[test]
    fn test_invalid_window_size_rejected() {
        assert!(parse(&["--width", "0"]).is_err());
    }
}
