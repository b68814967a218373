//! Storm track plotter
//!
//! Command-line entry point: resolves configuration, then plots one track.

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use track_plotter::{pipeline, Cli, PlotConfig};

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_json);

    info!("Starting track plotter");

    let config = match PlotConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = pipeline::run(&config) {
        error!(region = %config.region_id, csv = %config.csv_file.display(), "Plot failed: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let builder = fmt().with_env_filter(filter).with_target(true).with_level(true);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
