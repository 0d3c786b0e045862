//! Billing CLI - occurrence dates for recurring subscriptions
//!
//! # Commands
//!
//! - `billing occurrence -l 1 -u months -s 2019-01-31 -n 2` - Date of one occurrence
//! - `billing after -l 7 -u days -s 2019-01-02 -d 2019-01-20` - First occurrence after a date
//! - `billing schedule -l 3 -u months -s 2019-03-31 -n 8` - List the first occurrences
//! - `billing check` - Show the resolved configuration
//!
//! Results go to stdout; logs go to stderr.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use service_cli::commands::{self, IntervalArgs};
use service_cli::config::{build_config, CliArgs};
use service_cli::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Billing interval calculator CLI
#[derive(Parser)]
#[command(name = "billing")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE", env = "BILLING_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the date of a numbered occurrence (1 is the start date)
    Occurrence {
        #[command(flatten)]
        interval: IntervalArgs,

        /// Occurrence number (1-9999)
        #[arg(short, long)]
        number: u32,
    },

    /// Print the first occurrence strictly after a date
    After {
        #[command(flatten)]
        interval: IntervalArgs,

        /// Reference date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
    },

    /// List the first occurrences of the subscription
    Schedule {
        #[command(flatten)]
        interval: IntervalArgs,

        /// Number of occurrences to list (defaults to schedule_count)
        #[arg(short = 'n', long)]
        count: Option<u32>,
    },

    /// Check the resolved configuration
    Check,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs {
        config_file: cli.config.clone(),
        log_level: cli.log_level.clone(),
        verbose: cli.verbose,
    })?;

    init_tracing(config.log_level.as_filter_str());
    info!(
        version = service_cli::VERSION,
        log_level = %config.log_level,
        schedule_count = config.schedule_count,
        "Configuration loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Occurrence { interval, number } => {
            let calculator = interval.resolve(&config.subscription)?;
            commands::occurrence::run(&mut out, &calculator, number)?;
        }
        Commands::After { interval, date } => {
            let calculator = interval.resolve(&config.subscription)?;
            commands::after::run(&mut out, &calculator, &date)?;
        }
        Commands::Schedule { interval, count } => {
            let calculator = interval.resolve(&config.subscription)?;
            commands::schedule::run(&mut out, &calculator, count, config.schedule_count)?;
        }
        Commands::Check => commands::check::run(&mut out, &config)?,
    }

    out.flush()?;
    Ok(())
}
