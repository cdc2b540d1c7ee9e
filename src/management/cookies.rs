use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use thiserror::Error;

use crate::{
    config::AppPaths,
    console::{Console, ConsoleError},
    prompt::{PromptError, confirm},
    types::Site,
    utils,
};

#[derive(Debug, Error)]
pub enum CookieError {
    #[error("cookie I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error(transparent)]
    Console(#[from] ConsoleError),
}

/// Saved login cookies, one file per site.
pub struct CookieManager {
    paths: AppPaths,
}

impl CookieManager {
    pub fn new(paths: AppPaths) -> Self {
        Self { paths }
    }

    pub fn cookie_path(&self, site: Site) -> PathBuf {
        self.paths.cookie_file(site)
    }

    pub async fn has_cookies(&self, site: Site) -> bool {
        utils::file_exists(&self.cookie_path(site)).await
    }

    /// Whether cookies are saved for any site.
    pub async fn user_has_saved_cookies(&self) -> bool {
        for site in Site::ALL {
            if self.has_cookies(site).await {
                return true;
            }
        }
        false
    }

    /// Offers to delete the saved cookies for `site`.
    ///
    /// Nothing is asked when no cookies are saved. Returns whether the file
    /// was deleted.
    pub async fn delete_cookies<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        site: Site,
    ) -> Result<bool, CookieError> {
        let path = self.cookie_path(site);
        if !utils::file_exists(&path).await {
            return Ok(false);
        }

        let message = format!(
            "Do you want to delete your saved cookies for {} as well? (y/N): ",
            site.readable_name()
        );
        if !confirm(console, &message, false)? {
            return Ok(false);
        }

        utils::remove_file(&path).await?;
        // the cookies folder is only kept around while it holds something
        utils::remove_folder_if_empty(&self.paths.cookies_dir()).await?;
        tracing::info!(site = site.key(), "deleted saved cookies");
        console.success(&format!(
            "Successfully deleted your saved cookies for {}.",
            site.readable_name()
        ))?;
        Ok(true)
    }
}
