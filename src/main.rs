//! Scan Dojo CLI entry point.

use clap::Parser;

use scandojo::cli::{Cli, Commands};
use scandojo::infrastructure::config::ConfigLoader;
use scandojo::infrastructure::logging::LogHandle;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logging comes up before dispatch so command setup is captured too.
    // A broken config file falls back to default logging here; the command
    // itself reloads the config and reports the real error.
    let mut logging_config = ConfigLoader::load()
        .map(|config| config.logging)
        .unwrap_or_default();
    if cli.verbose {
        logging_config.level = "debug".to_string();
    }
    let _log_guard = match LogHandle::init(&logging_config) {
        Ok(handle) => Some(handle),
        Err(error) => {
            eprintln!("warning: logging disabled: {error}");
            None
        }
    };

    let result = match cli.command {
        Commands::Init(args) => scandojo::cli::commands::init::execute(args, cli.json).await,
        Commands::Play => scandojo::cli::commands::play::execute(cli.json).await,
        Commands::Status => scandojo::cli::commands::status::execute(cli.json).await,
        Commands::Reset(args) => scandojo::cli::commands::reset::execute(args, cli.json).await,
    };

    if let Err(error) = result {
        scandojo::cli::handle_error(&error, cli.json);
    }
}
