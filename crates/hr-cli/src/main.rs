//! hr - HR desk shell
//!
//! Reads one command per line from stdin and answers each with JSON.
//!
//! # Examples
//!
//! ```bash
//! printf 'login admin@company.com password123\nleave list\n' | hr --pretty
//!
//! # Reproducible attendance calendars, no simulated latency
//! HR_ATTENDANCE_RNG_SEED=7 HR_AUTH_SIMULATED_LATENCY_MS=0 hr
//! ```

use hr_app::AppState;
use hr_cli::{Cli, CliResult, Shell, logger};
use hr_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::info;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    // Load and validate configuration
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => Config::config_dir()?,
    };
    let config = Config::load_from(&config_dir)?;
    config.validate()?;

    let log_file = config.log_file_path(&config_dir);
    if let Some(ref path) = log_file
        && let Some(log_dir) = path.parent()
    {
        std::fs::create_dir_all(log_dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting hr v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let mut shell = Shell::new(AppState::from_config(&config), cli.pretty);
    shell
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
}
