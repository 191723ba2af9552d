// Main entry point - Configuration, dependency wiring and command dispatch
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use leakwatch_telemetry::application::clock::SystemClock;
use leakwatch_telemetry::infrastructure::config::load_dashboard_config;
use leakwatch_telemetry::presentation::app_state::AppState;
use leakwatch_telemetry::presentation::handlers;

/// Synthetic leak-monitoring telemetry rendered as dashboard JSON
#[derive(Parser)]
#[command(name = "leakwatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (default: config/dashboard.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List industries with their leak types and sensors
    Industries,

    /// Leak types of one industry with their current status
    Industry {
        /// Industry slug, e.g. oil-gas
        slug: String,
    },

    /// Sensor cards for one leak type
    Leak {
        /// Industry slug
        industry: String,
        /// Leak type slug, e.g. faulty-valves
        leak_type: String,
    },

    /// Time series for a sensor type
    Sensor {
        /// Sensor type name, e.g. "Pressure Sensor"
        name: String,

        /// Number of points (default from config)
        #[arg(short, long)]
        points: Option<usize>,
    },

    /// Detail view of one sensor of a leak type
    SensorDetail {
        industry: String,
        leak_type: String,
        /// Position of the sensor within the leak type
        index: usize,
    },

    /// Predictive maintenance summary
    Predictive,

    /// Health of every distinct sensor
    Fleet {
        /// Restrict to one industry slug
        #[arg(short, long)]
        industry: Option<String>,
    },

    /// Standing alerts with per-status totals
    Alerts {
        /// all, active, acknowledged, resolved, critical or high
        #[arg(short, long, default_value = "all")]
        filter: String,

        /// Restrict to alerts for one industry slug
        #[arg(short, long)]
        industry: Option<String>,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    // stdout carries the JSON payload
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = load_dashboard_config(cli.config.as_deref())?;
    let state = AppState::new(config, Arc::new(SystemClock));

    tracing::info!("Starting leakwatch v{}", env!("CARGO_PKG_VERSION"));

    let output = match &cli.command {
        Commands::Industries => handlers::list_industries(&state)?,
        Commands::Industry { slug } => handlers::industry_overview(&state, slug)?,
        Commands::Leak {
            industry,
            leak_type,
        } => handlers::leak_type_dashboard(&state, industry, leak_type)?,
        Commands::Sensor { name, points } => handlers::sensor_series(&state, name, *points)?,
        Commands::SensorDetail {
            industry,
            leak_type,
            index,
        } => handlers::sensor_detail(&state, industry, leak_type, *index)?,
        Commands::Predictive => handlers::predictive(&state)?,
        Commands::Fleet { industry } => handlers::fleet_health(&state, industry.as_deref())?,
        Commands::Alerts { filter, industry } => {
            handlers::alerts(&state, filter, industry.as_deref())?
        }
        Commands::Config => handlers::dump_config(&state)?,
    };

    println!("{}", output);

    Ok(())
}
