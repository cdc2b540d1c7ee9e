use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

const CONNECTIVITY_URL: &str = "https://www.google.com";

/// Indeterminate progress indicator bound to a scope.
///
/// The spinner ticks until the guard is dropped, so it is cleared on every
/// exit path of the wrapped call, including early returns and panics.
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    pub fn start(message: impl Into<String>) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_message(message.into());
        pb.enable_steady_tick(Duration::from_millis(100));
        if let Ok(style) = ProgressStyle::with_template("{spinner:.yellow} {msg}") {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }
        Self { pb }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.pb.finish_and_clear();
    }
}

/// Checks for an active internet connection with a HEAD request.
///
/// Connection failures and timeouts count as offline.
pub async fn check_internet_connection() -> bool {
    let _spinner = Spinner::start("Checking for an active internet connection...");

    let client = match Client::builder().timeout(Duration::from_secs(5)).build() {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!("cannot build HTTP client: {}", e);
            return false;
        }
    };

    match client.head(CONNECTIVITY_URL).send().await {
        Ok(_) => true,
        Err(e) => {
            tracing::info!("connectivity check failed: {}", e);
            false
        }
    }
}
