use std::{fmt, str::FromStr};

use clap::ValueEnum;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid website: {0}")]
pub struct SiteError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Site {
    Fantia,
    #[value(name = "pixiv_fanbox", alias = "pixiv-fanbox")]
    PixivFanbox,
}

impl Site {
    pub const ALL: [Site; 2] = [Site::Fantia, Site::PixivFanbox];

    pub fn key(&self) -> &'static str {
        match self {
            Site::Fantia => "fantia",
            Site::PixivFanbox => "pixiv_fanbox",
        }
    }

    pub fn readable_name(&self) -> &'static str {
        match self {
            Site::Fantia => "Fantia",
            Site::PixivFanbox => "Pixiv Fanbox",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.readable_name())
    }
}

impl FromStr for Site {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fantia" => Ok(Site::Fantia),
            "pixiv_fanbox" | "pixiv-fanbox" => Ok(Site::PixivFanbox),
            other => Err(SiteError(other.to_string())),
        }
    }
}

/// Whether URLs point at single posts or at a creator's post listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Post,
    Creator,
}

/// Outcome of an interactive collection.
///
/// Keeps a user cancellation apart from a collection that ended up with no
/// items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    Cancelled,
    Empty,
    Items(Vec<T>),
}

impl<T> Selection<T> {
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            Selection::Empty
        } else {
            Selection::Items(items)
        }
    }
}

/// What the user wants downloaded from each post.
///
/// The link options are only asked for Pixiv Fanbox and stay `None` for Fantia.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadChoices {
    pub images: bool,
    pub thumbnail: bool,
    pub attachments: bool,
    pub gdrive_links: Option<bool>,
    pub detect_other_links: Option<bool>,
}

impl DownloadChoices {
    pub fn any(&self) -> bool {
        self.images
            || self.thumbnail
            || self.attachments
            || self.gdrive_links.unwrap_or(false)
            || self.detect_other_links.unwrap_or(false)
    }
}
