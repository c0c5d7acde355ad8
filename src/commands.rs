// Import required dependencies
use log::info;
use std::path::PathBuf;

use crate::cli::{Cli, GenerateConfigArgs, MergeArgs};
use dicmerge::{
    config::Config,
    core::ProcessingCore,
    errors::MergerResult,
    file_utils::FsDirectory,
    prompt::ConsolePrompter,
};

// Command handler for processing CLI commands
pub struct CommandHandler;

impl CommandHandler {
    // Handle the merge command - the interactive dictionary merge
    pub fn handle_merge(cli: &Cli, args: MergeArgs) -> MergerResult<()> {
        info!("Starting merge operation");

        // Load existing config or fall back to defaults
        let config = match args.config {
            Some(path) => Config::load(&path)?,
            None => Config::default(),
        };

        let directory = FsDirectory::new(args.dir.unwrap_or_else(|| PathBuf::from(".")));
        let mut prompter = ConsolePrompter::new();

        let mut core = ProcessingCore::new(config, cli.verbose_count() > 0);
        let summary = core.process(&directory, &mut prompter)?;

        info!(
            "Merge operation completed: {} files merged, {} unique entries",
            summary.files_merged, summary.unique_entries
        );
        Ok(())
    }

    // Handle configuration file generation
    pub fn handle_generate_config(args: GenerateConfigArgs) -> MergerResult<()> {
        info!("Generating configuration file");

        Config::template().save(&args.output)?;

        info!("Configuration file generated at: {:?}", args.output);
        Ok(())
    }
}
