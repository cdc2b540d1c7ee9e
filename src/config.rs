//! Application directory layout.
//!
//! All persisted state lives below one root in the platform-specific local
//! data directory:
//! - Linux: `~/.local/share/culturedcli`
//! - macOS: `~/Library/Application Support/culturedcli`
//! - Windows: `%LOCALAPPDATA%/culturedcli`
//!
//! ```text
//! culturedcli/
//!   config.json
//!   cookies/<site>_cookies
//!   logs/v<version>/culturedcli_<date>.log
//! ```

use std::path::{Path, PathBuf};

use crate::types::Site;

pub const APP_NAME: &str = "culturedcli";

/// Folder created below the desktop when no valid download directory is configured.
pub const DEFAULT_DOWNLOAD_FOLDER: &str = "cultured-downloader";

#[derive(Debug, Clone)]
pub struct AppPaths {
    root: PathBuf,
}

impl AppPaths {
    pub fn new() -> Self {
        let mut root = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        root.push(APP_NAME);
        Self { root }
    }

    /// Layout rooted somewhere else, e.g. a temporary directory.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.json")
    }

    pub fn cookies_dir(&self) -> PathBuf {
        self.root.join("cookies")
    }

    pub fn cookie_file(&self, site: Site) -> PathBuf {
        self.cookies_dir().join(format!("{}_cookies", site.key()))
    }

    pub fn logs_root(&self) -> PathBuf {
        self.root.join("logs")
    }

    pub fn logs_dir(&self, version: &str) -> PathBuf {
        self.logs_root().join(format!("v{version}"))
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

/// `<desktop>/cultured-downloader`, falling back to `~/Desktop` when the
/// platform has no desktop directory.
pub fn default_download_directory() -> PathBuf {
    let desktop = dirs::desktop_dir().unwrap_or_else(|| {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Desktop")
    });
    desktop.join(DEFAULT_DOWNLOAD_FOLDER)
}
