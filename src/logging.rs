use anyhow::{Context, Result}; // Importing Context and Result from anyhow for error handling
use chrono::Local; // Importing Local from chrono to get the current date and time
use crossterm::style::Stylize; // Importing Stylize from crossterm to style log levels
use log::{Level, LevelFilter, Metadata, Record}; // Importing logging types from the log crate
use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::Path,
    sync::Mutex,
};

// Logger that prints coloured records to stderr and appends plain ones to an optional file
pub struct Logger {
    log_file: Option<Mutex<File>>,
    level: LevelFilter,
}

impl Logger {
    pub fn new(log_path: Option<&Path>, level: LevelFilter) -> Result<Self> {
        let log_file = log_path
            .map(|path| {
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("Failed to open log file {}", path.display()))
            })
            .transpose()?
            .map(Mutex::new);

        Ok(Self { log_file, level })
    }

    // Install as the global logger
    pub fn init(log_path: Option<&Path>, level: LevelFilter) -> Result<()> {
        let logger = Self::new(log_path, level)?;
        log::set_boxed_logger(Box::new(logger)).context("A logger is already installed")?;
        log::set_max_level(level);
        Ok(())
    }

    fn format_plain(record: &Record) -> String {
        format!(
            "[{}] {} - {}: {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    }

    fn format_console(record: &Record) -> String {
        let level_str = match record.level() {
            Level::Error => record.level().to_string().red(),
            Level::Warn => record.level().to_string().yellow(),
            Level::Info => record.level().to_string().green(),
            Level::Debug => record.level().to_string().blue(),
            Level::Trace => record.level().to_string().magenta(),
        };

        format!(
            "[{}] {} - {}: {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            level_str,
            record.target(),
            record.args()
        )
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        eprint!("{}", Self::format_console(record));

        if let Some(log_file) = &self.log_file {
            if let Ok(mut file) = log_file.lock() {
                let _ = file.write_all(Self::format_plain(record).as_bytes());
            }
        }
    }

    fn flush(&self) {
        if let Some(log_file) = &self.log_file {
            if let Ok(mut file) = log_file.lock() {
                let _ = file.flush();
            }
        }
    }
}
