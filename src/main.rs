// ============================================================================
// dicmerge - Interactive .dic Dictionary Merger
// Main Entry Point
//
// Parses the command line, installs logging and dispatches to the command
// handlers. Any error ends the run: it is returned from `main`, printed, and
// the process exits with a failure status.
// ============================================================================

use clap::Parser;
use log::info;

mod cli; // Command-line interface definitions and argument parsing
mod commands; // Command handlers for merge and generate-config

use cli::{Cli, Commands};
use commands::CommandHandler;
use dicmerge::errors::MergerResult;
use dicmerge::logging::Logger;

fn main() -> MergerResult<()> {
    let cli = Cli::parse();

    // File logging uses the crate's own logger; otherwise env_logger on stderr
    match &cli.log_file {
        Some(path) => Logger::init(Some(path.as_path()), cli.log_level())?,
        None => env_logger::builder().filter_level(cli.log_level()).init(),
    }

    info!("dicmerge starting up");

    match cli.command {
        Some(Commands::GenerateConfig(args)) => {
            info!("Executing generate-config command");
            CommandHandler::handle_generate_config(args)?;
        }
        Some(Commands::Merge(ref args)) => {
            info!("Executing merge command");
            CommandHandler::handle_merge(&cli, args.clone())?;
        }
        None => {
            info!("Executing merge command");
            CommandHandler::handle_merge(&cli, cli::MergeArgs::default())?;
        }
    }

    Ok(())
}
