//! narrate CLI binary.
//!
//! Provides a command-line interface for describing short time series.

mod cmd;
mod input;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use narrate::SignalSetConfig;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "narrate")]
#[command(about = "Describe the latest point of a short time series", long_about = None)]
#[command(version)]
struct Cli {
    /// Log signal computations at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe a series (defaults to the monthly sample)
    Describe {
        /// Points as LABEL=VALUE, oldest first
        points: Vec<String>,

        /// Read the series from a JSON file of {"label", "value"} objects
        #[arg(short, long, conflicts_with = "points")]
        input: Option<PathBuf>,

        /// Trend-keeper lookbacks
        #[arg(short, long, value_delimiter = ',', default_value = "2,3,6,9,12")]
        lookbacks: Vec<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Leave out lookbacks longer than the series instead of failing
        #[arg(long)]
        skip_oversized: bool,

        /// Also print every signal's summary
        #[arg(long)]
        dump: bool,
    },

    /// List available signals
    Signals {
        /// Filter by category (change, trend)
        #[arg(short, long)]
        category: Option<String>,

        /// Show a single signal, e.g. trend_keeper_6
        #[arg(short, long, conflicts_with = "category")]
        name: Option<String>,

        /// Show detailed information
        #[arg(long)]
        detailed: bool,
    },

    /// Print the monthly sample series as JSON
    Sample,
}

/// Output format for the describe command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Plain narrative text
    Text,
    /// The narrative and every signal result as JSON
    Json,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    // A missing .env file is fine; RUST_LOG may come from the environment.
    dotenvy::dotenv().ok();

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Describe {
            points,
            input,
            lookbacks,
            skip_oversized,
            format,
            dump,
        } => {
            let series = input::load_series(&points, input.as_deref())?;
            let config = SignalSetConfig {
                lookbacks,
                skip_oversized,
            };
            cmd::describe::describe_series(&series, config, format, dump)?;
        }
        Commands::Signals {
            category,
            name,
            detailed,
        } => match name {
            Some(name) => cmd::signals::show_signal(&name)?,
            None => cmd::signals::list_signals(category.as_deref(), detailed),
        },
        Commands::Sample => {
            cmd::sample::print_sample()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_describe_defaults() {
        let cli = Cli::try_parse_from(["narrate", "describe"]).unwrap();
        match cli.command {
            Commands::Describe {
                points,
                input,
                lookbacks,
                skip_oversized,
                format,
                dump,
            } => {
                assert!(points.is_empty());
                assert!(input.is_none());
                assert_eq!(lookbacks, vec![2, 3, 6, 9, 12]);
                assert!(!skip_oversized);
                assert_eq!(format, OutputFormat::Text);
                assert!(!dump);
            }
            _ => panic!("expected describe"),
        }
    }

    #[test]
    fn test_describe_points_and_flags() {
        let cli = Cli::try_parse_from([
            "narrate", "-v", "describe", "Jan=1.5", "Feb=2", "--lookbacks", "2,4", "--format",
            "json", "--dump", "--skip-oversized",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Describe {
                points,
                lookbacks,
                skip_oversized,
                format,
                dump,
                ..
            } => {
                assert_eq!(points, vec!["Jan=1.5", "Feb=2"]);
                assert!(skip_oversized);
                assert_eq!(lookbacks, vec![2, 4]);
                assert_eq!(format, OutputFormat::Json);
                assert!(dump);
            }
            _ => panic!("expected describe"),
        }
    }

    #[test]
    fn test_input_conflicts_with_points() {
        let result = Cli::try_parse_from(["narrate", "describe", "Jan=1", "--input", "x.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_signals_name() {
        let cli = Cli::try_parse_from(["narrate", "signals", "--name", "trend_keeper_6"]).unwrap();
        match cli.command {
            Commands::Signals { name, category, .. } => {
                assert_eq!(name.as_deref(), Some("trend_keeper_6"));
                assert!(category.is_none());
            }
            _ => panic!("expected signals"),
        }
    }

    #[test]
    fn test_signals_name_conflicts_with_category() {
        let result =
            Cli::try_parse_from(["narrate", "signals", "--name", "recent_change", "-c", "trend"]);
        assert!(result.is_err());
    }
}
