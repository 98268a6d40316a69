//! vpf - Void Probability Function CLI
//!
//! Command-line entry point for the `vpf_kernel` estimator.
//!
//! # Commands
//!
//! - `vpf estimate --catalogue <file>` - Estimate the VPF of a catalogue
//! - `vpf generate --output <file>` - Write a uniform random catalogue
//! - `vpf poisson` - Compare a random catalogue with the Poisson VPF
//! - `vpf check` - Validate the configuration

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod catalogue;
mod commands;
mod config;
mod error;
mod output;
mod radii;

pub use error::{CliError, Result};

use commands::EstimatorOverrides;
use config::CliConfig;
use output::OutputFormat;

/// Void probability function estimation on the periodic unit cube
#[derive(Parser)]
#[command(name = "vpf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging, ignoring RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "vpf.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Estimator flags shared by several commands.
#[derive(clap::Args, Debug, Clone)]
struct EstimatorArgs {
    /// Comma-separated radii (fractions of the box side)
    #[arg(long, conflicts_with = "range")]
    radii: Option<String>,

    /// Radius range start:stop:step (stop excluded)
    #[arg(long)]
    range: Option<String>,

    /// Trial spheres per radius
    #[arg(short = 'n', long)]
    trials: Option<usize>,

    /// Generator seed (entropy when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Estimate radii in parallel
    #[arg(long)]
    parallel: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl EstimatorArgs {
    fn overrides(&self) -> EstimatorOverrides {
        EstimatorOverrides {
            trials: self.trials,
            seed: self.seed,
            parallel: self.parallel,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the void probability function of a catalogue
    Estimate {
        /// Path to catalogue file (CSV with x,y,z columns)
        #[arg(short = 'i', long)]
        catalogue: PathBuf,

        #[command(flatten)]
        args: EstimatorArgs,
    },

    /// Write a catalogue of uniformly random points
    Generate {
        /// Number of points
        #[arg(short, long, default_value = "250")]
        points: usize,

        /// Generator seed (entropy when omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output catalogue file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Compare a uniform random catalogue with the Poisson prediction
    Poisson {
        /// Number of points in the random catalogue
        #[arg(short, long, default_value = "250")]
        points: usize,

        #[command(flatten)]
        args: EstimatorArgs,
    },

    /// Check configuration
    Check,
}

fn load_config(path: &Path) -> anyhow::Result<CliConfig> {
    let config = CliConfig::load_or_default(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?
        .with_env_override();
    Ok(config)
}

/// Picks the log filter directive: `--verbose`, then `RUST_LOG`, then the
/// configured level.
fn filter_directive(verbose: bool, rust_log: Option<String>, configured: &str) -> String {
    if verbose {
        return "debug".to_string();
    }
    rust_log
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| configured.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    let directive = filter_directive(
        cli.verbose,
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        &config.log_level,
    );
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("invalid log filter '{}'", directive))?;

    // Initialise tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(config = %cli.config.display(), "configuration loaded");

    match cli.command {
        Commands::Estimate { catalogue, args } => {
            config.validate()?;
            commands::estimate::run(
                &config,
                &catalogue,
                args.radii.as_deref(),
                args.range.as_deref(),
                &args.overrides(),
                args.format.unwrap_or(config.output.format),
                args.output.as_deref(),
            )?
        }
        Commands::Generate {
            points,
            seed,
            output,
        } => commands::generate::run(points, seed, &output)?,
        Commands::Poisson { points, args } => {
            config.validate()?;
            commands::poisson::run(
                &config,
                points,
                args.radii.as_deref(),
                args.range.as_deref(),
                &args.overrides(),
                args.format.unwrap_or(config.output.format),
                args.output.as_deref(),
            )?
        }
        Commands::Check => commands::check::run(&config)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_overrides_rust_log() {
        let directive = filter_directive(true, Some("warn".to_string()), "info");
        assert_eq!(directive, "debug");
    }

    #[test]
    fn test_rust_log_overrides_config() {
        let directive = filter_directive(false, Some("vpf_kernel=trace".to_string()), "info");
        assert_eq!(directive, "vpf_kernel=trace");
    }

    #[test]
    fn test_config_level_fallback() {
        assert_eq!(filter_directive(false, None, "warn"), "warn");
        assert_eq!(filter_directive(false, Some("  ".to_string()), "warn"), "warn");
    }

    #[test]
    fn test_cli_parses_verbose_with_range() {
        let cli = Cli::try_parse_from([
            "vpf",
            "--verbose",
            "poisson",
            "--range",
            "0.01:0.05:0.01",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Poisson { points: 250, .. }));
    }
}
