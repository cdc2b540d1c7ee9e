//! # CLI Module
//!
//! Command implementations behind the `culturedcli` subcommands. Each command
//! wires the interactive prompts, the persisted state in
//! [`crate::management`] and the colored output macros together.
//!
//! ## Commands
//!
//! - [`download`] - Asks for download options and URLs and prints the
//!   resolved work list
//! - [`show_config`] - Prints the current configuration
//! - [`change_download_directory`] - Interactively changes the download directory
//! - [`delete_cookies`] - Deletes the saved cookies of one site
//! - [`check`] - Checks for an active internet connection
//! - [`show_log_path`] - Prints where the current log file is written
//!
//! ## Error Handling
//!
//! Mistakes in user input are handled inside the prompts and never reach
//! this layer. Commands only return errors for I/O failures, which `main`
//! hands to the logger as fatal errors.
//!
//! ## Usage Patterns
//!
//! ```bash
//! culturedcli download fantia --creator     # Creator pages with page ranges
//! culturedcli download pixiv_fanbox         # Single posts
//! culturedcli config download-dir           # Change the download directory
//! culturedcli cookies delete fantia         # Forget saved Fantia cookies
//! ```

mod check;
mod config;
mod cookies;
mod download;
mod logs;

pub use check::check;
pub use config::change_download_directory;
pub use config::show_config;
pub use cookies::delete_cookies;
pub use download::download;
pub use logs::show_log_path;
