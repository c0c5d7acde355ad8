// Declare the config module, which handles the JSON merge settings
pub mod config;

// Declare the core module, which contains the merge set, output document and merge run
pub mod core;

// Declare the encoding module, which resolves codec names and decodes dictionaries
pub mod encoding;

// Declare the errors module, which contains custom error types
pub mod errors;

// Declare the file_utils module, which lists directories and writes the output file
pub mod file_utils;

// Declare the logging module, which handles logging to stderr and an optional file
pub mod logging;

// Declare the progress module, which tracks per-file progress and the run summary
pub mod progress;

// Declare the prompt module, which asks the user questions on the console
pub mod prompt;
