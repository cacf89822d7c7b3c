//! Cartograph CLI - Render DDD context maps as PlantUML component diagrams

mod cli;

use clap::Parser;
use cartograph::core::logging::init_logging;

fn main() {
    let cli_args = cli::Cli::parse();

    if let Err(e) = init_logging(
        Some(cli_args.log_level.as_str()),
        Some(cli_args.log_format.as_str()),
    ) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let app = cli::CartographApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
