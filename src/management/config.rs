use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    config::{AppPaths, default_download_directory},
    console::{Console, ConsoleError},
    prompt::{PromptError, confirm},
    urls, utils,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config data: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error(transparent)]
    Console(#[from] ConsoleError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_download_directory_string")]
    pub download_directory: String,
}

fn default_download_directory_string() -> String {
    default_download_directory().to_string_lossy().into_owned()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            download_directory: default_download_directory_string(),
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
    config: Config,
}

impl ConfigManager {
    pub fn new(paths: &AppPaths, config: Config) -> Self {
        Self {
            path: paths.config_file(),
            config,
        }
    }

    /// Whether `data` is a valid persisted config.
    pub fn validate(data: &str) -> bool {
        Self::parse(data).is_ok()
    }

    pub fn parse(data: &str) -> Result<Config, ConfigError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Loads the config file.
    ///
    /// A missing file behaves like an empty object. Invalid data is replaced
    /// by the defaults, which are written back to disk. A download directory
    /// that does not exist is reset to the default one in memory only.
    pub async fn load(paths: &AppPaths) -> Result<Self, ConfigError> {
        let path = paths.config_file();
        let data = if utils::file_exists(&path).await {
            async_fs::read_to_string(&path).await?
        } else {
            "{}".to_string()
        };

        let mut manager = match Self::parse(&data) {
            Ok(config) => Self { path, config },
            Err(e) => {
                tracing::info!(
                    "Config data is invalid, resetting to defaults: {}\n\nData: {}",
                    e,
                    data
                );
                let manager = Self {
                    path,
                    config: Config::default(),
                };
                manager.persist().await?;
                manager
            }
        };

        if !utils::folder_exists(Path::new(&manager.config.download_directory)).await {
            manager.config.download_directory = default_download_directory_string();
        }

        Ok(manager)
    }

    pub async fn persist(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.config)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Interactively changes the download directory and persists it.
    ///
    /// Returns whether the directory was changed. With `print_notice` the
    /// user is told that a running session keeps the old directory.
    pub async fn change_download_directory<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        print_notice: bool,
    ) -> Result<bool, ConfigError> {
        console.warning(&format!(
            "Your current download directory is\n{}",
            self.config.download_directory
        ))?;

        if !confirm(
            console,
            "Do you want to change your download directory? (y/N): ",
            false,
        )? {
            console.println("")?;
            return Ok(false);
        }

        loop {
            let input = console.read_line("Enter your new download directory (X to cancel): ")?;

            if input.is_empty() {
                console.danger("Please enter a valid download directory.\n")?;
                continue;
            }

            if urls::is_cancel_token(&input) {
                console.warning("Cancelled changing the download directory.")?;
                console.println("")?;
                return Ok(false);
            }

            let new_directory = PathBuf::from(&input);
            if !utils::folder_exists(&new_directory).await {
                console.danger(
                    "Download directory does not exist, please create it first and try again.\n",
                )?;
                continue;
            }

            let new_directory = new_directory.to_string_lossy().into_owned();
            if self.config.download_directory == new_directory {
                console.danger("Download directory is already set to that.\n")?;
                continue;
            }

            self.config.download_directory = new_directory;
            self.persist().await?;
            tracing::info!(
                directory = %self.config.download_directory,
                "download directory changed"
            );
            console.success(&format!(
                "Download directory successfully changed to\n{}",
                self.config.download_directory
            ))?;

            if print_notice {
                console.danger(
                    "\nNotice: You will need to re-run the program for the changes to take effect in the current session.",
                )?;
            }

            console.println("")?;
            return Ok(true);
        }
    }
}
