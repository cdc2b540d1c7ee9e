//! URL normalization and page range expansion.
//!
//! Everything here is pure; the interactive loops in [`crate::input`] only
//! decide which message to print and which phase to restart.

use std::{collections::HashSet, ops::RangeInclusive, str::FromStr, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

use crate::types::{PageKind, Site};

/// Suffix of a creator's post listing.
pub const POSTS_SUFFIX: &str = "/posts";

/// Query parameters that keep Fantia listings ordered newest to oldest.
pub const FANTIA_ORDERING_QUERY: &str = "&q[s]=newer&q[tag]=";

/// Largest number of pages a single range token may expand to.
pub const MAX_PAGES_PER_RANGE: u32 = 10_000;

static FANTIA_POST_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://fantia\.jp/posts/\d+$").expect("hardcoded regex pattern is valid")
});

static FANTIA_CREATOR_POSTS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://fantia\.jp/fanclubs/\d+(/posts)?$")
        .expect("hardcoded regex pattern is valid")
});

static PIXIV_FANBOX_POST_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://(www\.fanbox\.cc/@[\w-]+|[\w-]+\.fanbox\.cc)/posts/\d+$")
        .expect("hardcoded regex pattern is valid")
});

static PIXIV_FANBOX_CREATOR_POSTS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://(www\.fanbox\.cc/@[\w-]+|[\w-]+\.fanbox\.cc)(/posts)?$")
        .expect("hardcoded regex pattern is valid")
});

static PAGE_NUM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[1-9]\d*(-[1-9]\d*)?$").expect("hardcoded regex pattern is valid")
});

pub fn url_pattern(site: Site, kind: PageKind) -> &'static Regex {
    match (site, kind) {
        (Site::Fantia, PageKind::Post) => &*FANTIA_POST_REGEX,
        (Site::Fantia, PageKind::Creator) => &*FANTIA_CREATOR_POSTS_REGEX,
        (Site::PixivFanbox, PageKind::Post) => &*PIXIV_FANBOX_POST_REGEX,
        (Site::PixivFanbox, PageKind::Creator) => &*PIXIV_FANBOX_CREATOR_POSTS_REGEX,
    }
}

/// Example URLs shown to the user before asking for input.
pub fn url_guide(site: Site, kind: PageKind) -> &'static str {
    match (site, kind) {
        (Site::Fantia, PageKind::Post) => "https://fantia.jp/posts/1234567",
        (Site::Fantia, PageKind::Creator) => "https://fantia.jp/fanclubs/1234/posts",
        (Site::PixivFanbox, PageKind::Post) => {
            "https://www.fanbox.cc/@creator_name/posts/1234567 or https://creator_name.fanbox.cc/posts/1234567"
        }
        (Site::PixivFanbox, PageKind::Creator) => {
            "https://www.fanbox.cc/@creator_name/posts or https://creator_name.fanbox.cc/posts"
        }
    }
}

/// Whether `input` is the cancel token ("x" or "X").
pub fn is_cancel_token(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("x")
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UrlError {
    #[error("the URL, {0}, is invalid")]
    Invalid(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageRangeError {
    #[error("the page number, {0}, is invalid")]
    Invalid(String),
    #[error("expected {expected} page numbers but got {actual}")]
    CountMismatch { expected: usize, actual: usize },
}

/// Splits a comma separated line into trimmed entries, keeping the first
/// occurrence of each one.
///
/// The flag is true when duplicates were dropped.
pub fn split_unique(input: &str) -> (Vec<String>, bool) {
    dedup(input.split(',').map(str::trim).map(str::to_string).collect())
}

/// Drops repeated entries, keeping the first occurrence of each one.
///
/// The flag is true when duplicates were dropped.
pub fn dedup(entries: Vec<String>) -> (Vec<String>, bool) {
    let total = entries.len();
    let mut seen = HashSet::new();
    let unique: Vec<String> = entries
        .into_iter()
        .filter(|entry| seen.insert(entry.clone()))
        .collect();

    let had_duplicates = unique.len() != total;
    (unique, had_duplicates)
}

/// Strips one trailing slash, validates the URL and, for creator pages,
/// appends the post listing suffix.
pub fn normalize_url(site: Site, kind: PageKind, url: &str) -> Result<String, UrlError> {
    let url = url.strip_suffix('/').unwrap_or(url);

    if !url_pattern(site, kind).is_match(url) {
        return Err(UrlError::Invalid(url.to_string()));
    }

    let mut url = url.to_string();
    if kind == PageKind::Creator && !url.ends_with(POSTS_SUFFIX) {
        url.push_str(POSTS_SUFFIX);
    }
    Ok(url)
}

/// Normalizes every URL, failing on the first invalid one.
pub fn normalize_urls(site: Site, kind: PageKind, urls: &[String]) -> Result<Vec<String>, UrlError> {
    urls.iter().map(|url| normalize_url(site, kind, url)).collect()
}

/// A single page or an inclusive range of pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRange {
    Single(u32),
    Range(u32, u32),
}

impl PageRange {
    /// Pages in ascending order, whichever way round the range was written.
    pub fn pages(&self) -> RangeInclusive<u32> {
        match *self {
            PageRange::Single(page) => page..=page,
            PageRange::Range(a, b) if a > b => b..=a,
            PageRange::Range(a, b) => a..=b,
        }
    }
}

impl FromStr for PageRange {
    type Err = PageRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let invalid = || PageRangeError::Invalid(token.to_string());

        if !PAGE_NUM_REGEX.is_match(token) {
            return Err(invalid());
        }

        match token.split_once('-') {
            None => token.parse().map(PageRange::Single).map_err(|_| invalid()),
            Some((start, end)) => {
                let start: u32 = start.parse().map_err(|_| invalid())?;
                let end: u32 = end.parse().map_err(|_| invalid())?;
                if start.abs_diff(end) >= MAX_PAGES_PER_RANGE {
                    return Err(invalid());
                }
                Ok(PageRange::Range(start, end))
            }
        }
    }
}

pub fn format_page_url(site: Site, base: &str, page: u32) -> String {
    let mut url = format!("{base}?page={page}");
    if site == Site::Fantia {
        url.push_str(FANTIA_ORDERING_QUERY);
    }
    url
}

/// Expands one page range token per URL into the list of page URLs.
///
/// The whole line is rejected if the token count does not match the URL
/// count or if any token is malformed.
pub fn expand_page_ranges(
    site: Site,
    urls: &[String],
    input: &str,
) -> Result<Vec<String>, PageRangeError> {
    let tokens: Vec<&str> = input.split(',').collect();
    if tokens.len() != urls.len() {
        return Err(PageRangeError::CountMismatch {
            expected: urls.len(),
            actual: tokens.len(),
        });
    }

    let ranges = tokens
        .iter()
        .map(|token| token.parse::<PageRange>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(urls
        .iter()
        .zip(ranges)
        .flat_map(|(url, range)| range.pages().map(move |page| format_page_url(site, url, page)))
        .collect())
}
