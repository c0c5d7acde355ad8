// Import required dependencies
use crate::core::LineCleaner;
use crate::encoding::{resolve_label, DEFAULT_ENCODING_LABEL};
use crate::errors::{ConfigError, MergerError, MergerResult};
use serde::{Deserialize, Serialize}; // For JSON serialization/deserialization
use std::path::Path;

/// Characters removed from every merged line unless configured otherwise
pub const DEFAULT_STRIP_CHARS: &str = " ^$";

/// Suffix that marks a dictionary file unless configured otherwise
pub const DEFAULT_EXTENSION: &str = ".dic";

// Merge settings that can be serialized to/from JSON; every field is optional in the file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_encoding: String, // Codec used when the encoding prompt is left empty
    pub extension: String,        // Case-sensitive suffix of dictionary files
    pub strip_chars: String,      // Characters removed from every line
    pub skip_count_header: bool,  // Drop the first line of every merged file
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_encoding: DEFAULT_ENCODING_LABEL.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            strip_chars: DEFAULT_STRIP_CHARS.to_string(),
            skip_count_header: false,
        }
    }
}

impl Config {
    // Load and validate configuration from a JSON file
    pub fn load(path: &Path) -> MergerResult<Self> {
        let content = std::fs::read_to_string(path).map_err(MergerError::Io)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        log::debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    // Save configuration to a JSON file
    pub fn save(&self, path: &Path) -> MergerResult<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| MergerError::Config(ConfigError::SerializationError(e.to_string())))?;
        std::fs::write(path, content).map_err(MergerError::Io)
    }

    // Create a default configuration template
    pub fn template() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extension.is_empty() {
            return Err(ConfigError::InvalidExtension);
        }

        // Stripping terminators would glue entries together
        if let Some(c) = self.strip_chars.chars().find(|c| matches!(c, '\n' | '\r')) {
            return Err(ConfigError::InvalidStripChars(c));
        }

        if resolve_label(&self.default_encoding).is_none() {
            return Err(ConfigError::UnknownDefaultEncoding(
                self.default_encoding.clone(),
            ));
        }

        Ok(())
    }

    pub fn line_cleaner(&self) -> LineCleaner {
        LineCleaner::new(self.strip_chars.chars())
    }
}
