//! Cultured Downloader CLI Library
//!
//! This library provides the interactive front end of a downloader for Fantia
//! and Pixiv Fanbox posts. It collects and validates the URLs a user wants to
//! download, expands page ranges for creator listings, persists the user's
//! configuration, and sets up logging for the whole process.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Application directory layout
//! - `console` - Terminal handle used by every interactive prompt
//! - `input` - Interactive collection of URLs and download choices
//! - `logger` - File logging, log pruning and the fatal error handler
//! - `management` - Persisted configuration and cookie files
//! - `prompt` - Validated single-line prompts
//! - `spinner` - Scoped progress indicator
//! - `types` - Data structures and type definitions
//! - `urls` - URL normalization and page range expansion
//! - `utils` - Async filesystem helpers

pub mod cli;
pub mod config;
pub mod console;
pub mod input;
pub mod logger;
pub mod management;
pub mod prompt;
pub mod spinner;
pub mod types;
pub mod urls;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object so the command layer can bubble
/// up errors from any module while keeping Send + Sync bounds for async
/// contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Loading configuration...");
/// info!("Found {} URLs", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a message on the success channel (bright green).
///
/// # Example
///
/// ```
/// success!("Download directory successfully changed to\n{}", path);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    println!("{}", $crate::console::paint($crate::console::Severity::Success, &std::format!($($arg)*)));
  })
}

/// Prints a message on the warning channel (bright yellow).
///
/// Used for notices that need the user's attention but do not stop the
/// current operation.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    println!("{}", $crate::console::paint($crate::console::Severity::Warning, &std::format!($($arg)*)));
  })
}

/// Prints a message on the danger channel (bright red).
///
/// Unlike a fatal error this does not terminate the program. Fatal errors go
/// through [`logger::Logger::report_fatal`] so they end up in the log file.
#[macro_export]
macro_rules! danger {
  ($($arg:tt)*) => ({
    println!("{}", $crate::console::paint($crate::console::Severity::Danger, &std::format!($($arg)*)));
  })
}
