// ============================================================================
// CLI Module - Command-Line Interface Definitions
//
// Everything here is optional: `dicmerge` with no arguments runs the
// interactive merge in the current directory.
// ============================================================================

use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// dicmerge - Interactive .dic Dictionary Merger
///
/// Offers every `.dic` file of a directory for merging, strips spaces, `^` and
/// `$` from each line, deduplicates, sorts, and writes a new dictionary whose
/// first line is the number of entries.
///
/// Examples:
///   dicmerge
///   dicmerge merge --dir ./dictionaries --config merge.json
///   dicmerge generate-config merge.json
#[derive(Parser)]
#[command(
    name = "dicmerge",
    about = "Merge .dic word lists into one sorted, deduplicated dictionary",
    version,
    after_help = "Examples:\n  \
                  dicmerge\n  \
                  dicmerge -v merge --dir ./dictionaries\n  \
                  dicmerge generate-config merge.json"
)]
pub struct Cli {
    /// Increase verbosity level (can be used multiple times)
    #[arg(
        global = true,
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v: debug + progress, -vv: trace)"
    )]
    verbose: u8,

    /// Set the logging level explicitly
    #[arg(
        global = true,
        long,
        default_value = "warn",
        help = "Set log level explicitly [error|warn|info|debug|trace]"
    )]
    log_level: String,

    /// Append log records to this file as well as stderr
    #[arg(global = true, long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// The operation to perform (defaults to merge)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Interactively merge dictionary files
    #[command(
        about = "Interactively merge the dictionary files of a directory",
        long_about = "Asks for an encoding, offers every dictionary file of the directory \
                      for merging, then asks for the output file name.\n\n\
                      Answer 'y' to merge a file; any other answer skips it."
    )]
    Merge(MergeArgs),

    /// Generate a configuration file template
    #[command(about = "Write a JSON configuration file with the default settings")]
    GenerateConfig(GenerateConfigArgs),
}

// Arguments for the merge command
#[derive(Parser, Clone, Default)]
pub struct MergeArgs {
    // Directory scanned for dictionaries
    #[arg(
        short = 'd',
        long = "dir",
        help = "Directory to scan for dictionaries (default: current directory)",
        value_name = "DIR"
    )]
    pub dir: Option<PathBuf>,

    // Configuration file path
    #[arg(
        short = 'c',
        long = "config",
        help = "JSON configuration file",
        value_name = "FILE"
    )]
    pub config: Option<PathBuf>,
}

// Arguments for the generate-config command
#[derive(Parser, Clone)]
pub struct GenerateConfigArgs {
    #[arg(help = "Destination path for configuration file", value_name = "FILE")]
    pub output: PathBuf,
}

impl Cli {
    // Explicit level, raised by -v flags
    pub fn log_level(&self) -> LevelFilter {
        let explicit = match self.log_level.to_ascii_lowercase().as_str() {
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Warn,
        };
        let from_flags = match self.verbose {
            0 => LevelFilter::Off,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        explicit.max(from_flags)
    }

    pub fn verbose_count(&self) -> u8 {
        self.verbose
    }
}
