//! File logging for the whole process.
//!
//! [`Logger::init`] is called once at startup. It installs a `tracing`
//! subscriber writing to `<root>/logs/v<version>/culturedcli_<date>.log` and
//! returns a handle that owns the log file. The handle is used to install the
//! panic hook, to report fatal errors and to flush the file on exit.

use std::{
    error::Error,
    fs::{self, File, OpenOptions},
    io,
    panic::{self, PanicHookInfo},
    path::{Path, PathBuf},
    process,
    sync::Arc,
    time::{Duration, SystemTime},
};

use chrono::{Local, NaiveDate};
use futures::StreamExt;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::{
    config::AppPaths,
    console::{Severity, paint},
};

/// Log files older than this are removed by [`Logger::prune`].
pub const LOG_RETENTION: Duration = Duration::from_secs(30 * 24 * 60 * 60);

const DEFAULT_FILTER: &str = "info,culturedcli=debug";

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("cannot prepare log file {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("a global logger is already installed")]
    AlreadyInitialized,
}

pub fn log_file_name(date: NaiveDate) -> String {
    format!("culturedcli_{}.log", date.format("%Y-%m-%d"))
}

/// `err` followed by one `caused by:` line per source.
pub fn error_chain(err: &(dyn Error + 'static)) -> String {
    let mut chain = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        chain.push_str(&format!("\n  caused by: {}", cause));
        source = cause.source();
    }
    chain
}

pub struct Logger {
    path: PathBuf,
    file: Arc<File>,
}

impl Logger {
    /// Opens today's log file and installs the global subscriber.
    ///
    /// The filter defaults to `info,culturedcli=debug` and can be overridden
    /// with `RUST_LOG`.
    pub fn init(paths: &AppPaths, version: &str) -> Result<Self, LoggerError> {
        let dir = paths.logs_dir(version);
        let path = dir.join(log_file_name(Local::now().date_naive()));
        let logger = Self::open(&path)?;

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(Arc::clone(&logger.file))
            .with_ansi(false)
            .try_init()
            .map_err(|_| LoggerError::AlreadyInitialized)?;

        tracing::info!(
            "Cultured Downloader CLI v{} logging to {}",
            version,
            path.display()
        );
        Ok(logger)
    }

    /// Opens (or creates) the log file at `path` without touching the global subscriber.
    pub fn open(path: &Path) -> Result<Self, LoggerError> {
        let io_err = |source| LoggerError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(io_err)?;

        Ok(Self {
            path: path.to_path_buf(),
            file: Arc::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deletes empty log files and log files older than [`LOG_RETENTION`]
    /// in `dir`, except for `keep`.
    ///
    /// Files that cannot be inspected or removed are skipped. Returns the
    /// number of deleted files.
    pub async fn prune(dir: &Path, keep: &Path, now: SystemTime) -> io::Result<usize> {
        let cutoff = now.checked_sub(LOG_RETENTION).unwrap_or(SystemTime::UNIX_EPOCH);
        let mut entries = async_fs::read_dir(dir).await?;
        let mut removed = 0;

        while let Some(entry) = entries.next().await {
            let Ok(entry) = entry else { continue };
            let path = entry.path();
            if path == keep {
                continue;
            }

            let Ok(metadata) = entry.metadata().await else {
                continue;
            };
            if !metadata.is_file() {
                continue;
            }

            let too_old = metadata.modified().map(|m| m < cutoff).unwrap_or(false);
            if metadata.len() == 0 || too_old {
                match async_fs::remove_file(&path).await {
                    Ok(()) => removed += 1,
                    Err(e) => tracing::debug!("cannot remove log {}: {}", path.display(), e),
                }
            }
        }

        Ok(removed)
    }

    /// Prunes the directory that holds the current log file.
    pub async fn prune_old_logs(&self) -> io::Result<usize> {
        match self.path.parent() {
            Some(dir) => Self::prune(dir, &self.path, SystemTime::now()).await,
            None => Ok(0),
        }
    }

    /// Routes panics through the log file.
    ///
    /// The panic is logged with its location and a backtrace, the user is
    /// pointed at the log file, and the process exits with status 1 after
    /// ENTER is pressed.
    pub fn install_panic_hook(&self) {
        let path = self.path.clone();
        let file = Arc::clone(&self.file);
        panic::set_hook(Box::new(move |info: &PanicHookInfo<'_>| {
            let payload = info
                .payload()
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| info.payload().downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic payload".to_string());
            let location = info
                .location()
                .map(|l| l.to_string())
                .unwrap_or_else(|| "unknown location".to_string());
            let backtrace = std::backtrace::Backtrace::force_capture();

            tracing::error!("Uncaught panic at {}: {}\n{}", location, payload, backtrace);
            let _ = file.sync_all();
            exit_after_report("panic", &path);
        }));
    }

    /// Logs a fatal error with its source chain and terminates the process.
    pub fn report_fatal(self, err: &(dyn Error + 'static)) -> ! {
        tracing::error!("Uncaught error: {}", error_chain(err));
        let path = self.path.clone();
        self.shutdown();
        exit_after_report("error", &path);
    }

    /// Flushes the log file to disk.
    pub fn shutdown(self) {
        tracing::debug!("logger shutting down");
        if let Err(e) = self.file.sync_all() {
            eprintln!("failed to flush log file {}: {}", self.path.display(), e);
        }
    }
}

fn exit_after_report(kind: &str, log_path: &Path) -> ! {
    eprintln!("{}", paint(Severity::Danger, &format!("\nUncaught {kind}")));
    eprintln!(
        "{}",
        paint(
            Severity::Danger,
            &format!(
                "Please provide the developer with the error log generated at\n{}",
                log_path.display()
            ),
        )
    );

    eprint!("Please press ENTER to exit...");
    let _ = io::stdin().read_line(&mut String::new());
    process::exit(1);
}
