use std::io::{BufRead, Write};

use crate::{
    console::Console,
    prompt::{PromptError, confirm},
    types::{PageKind, Selection, Site},
    urls::{self, PageRangeError, UrlError},
};

const DUPLICATE_WARNING: &str = "Warning: Duplicate URLs have been removed from your input...";

const PAGE_NUM_GUIDE: &str = "\nPlease enter the page numbers you wish to download from corresponding to the URLs you entered.\n\
For example, if you entered 2 URLs, you will enter something like '1, 1-3' to indicate \
that you wish to download from the 1st page of the first URL and the 1st to 3rd page of the second URL.";

/// Asks for the URLs to download from.
///
/// Post URLs are returned as entered (normalized). For creator pages the
/// user is also asked for one page range per URL and the expanded page URLs
/// are returned instead.
pub fn get_user_urls<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    site: Site,
    kind: PageKind,
) -> Result<Selection<String>, PromptError> {
    console.warning(&format!(
        "This option is for URL(s) such as {}\nAdditionally, you can enter multiple URLs separated by a comma.",
        urls::url_guide(site, kind)
    ))?;

    let Some(formatted_urls) = collect_urls(console, site, kind)? else {
        return Ok(Selection::Cancelled);
    };

    if kind == PageKind::Post {
        return Ok(Selection::from_items(formatted_urls));
    }

    match collect_page_urls(console, site, &formatted_urls)? {
        Some(page_urls) => Ok(Selection::from_items(page_urls)),
        None => Ok(Selection::Cancelled),
    }
}

fn collect_urls<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    site: Site,
    kind: PageKind,
) -> Result<Option<Vec<String>>, PromptError> {
    loop {
        let input = console.read_line("\nEnter URL(s) (X to cancel): ")?;
        if input.is_empty() {
            console.danger("User Error: Please enter a URL")?;
            continue;
        }
        if urls::is_cancel_token(&input) {
            return Ok(None);
        }

        let (unique_urls, had_duplicates) = urls::split_unique(&input);
        if had_duplicates {
            console.danger(DUPLICATE_WARNING)?;
        }

        let formatted_urls = match urls::normalize_urls(site, kind, &unique_urls) {
            Ok(formatted) => formatted,
            Err(UrlError::Invalid(url)) => {
                let suggestion = if unique_urls.len() > 1 {
                    "all the URLs entered are"
                } else {
                    "the URL entered is"
                };
                console.danger(&format!(
                    "User Error: The URL, {url}, is invalid.\nPlease make sure {suggestion} correct and try again."
                ))?;
                continue;
            }
        };

        // "/1/" and "/1" only collapse once normalized
        let (formatted_urls, dropped) = urls::dedup(formatted_urls);
        if dropped && !had_duplicates {
            console.danger(DUPLICATE_WARNING)?;
        }

        console.warning(&format!(
            "\nThe following URLs will be downloaded:\n{}",
            formatted_urls.join(", ")
        ))?;
        if confirm(console, "Do you wish to download from these URLs? (Y/n): ", true)? {
            tracing::debug!(site = site.key(), count = formatted_urls.len(), "urls accepted");
            return Ok(Some(formatted_urls));
        }
    }
}

fn collect_page_urls<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    site: Site,
    formatted_urls: &[String],
) -> Result<Option<Vec<String>>, PromptError> {
    console.warning(PAGE_NUM_GUIDE)?;

    let prompt = if formatted_urls.len() > 1 {
        format!(
            "\nPlease enter {} page numbers corresponding to the entered URLs (X to cancel): ",
            formatted_urls.len()
        )
    } else {
        "\nPlease enter a page number (X to cancel): ".to_string()
    };

    loop {
        let input = console.read_line(&prompt)?;
        if input.is_empty() {
            console.danger("User Error: Please enter a page number")?;
            continue;
        }
        if urls::is_cancel_token(&input) {
            return Ok(None);
        }

        match urls::expand_page_ranges(site, formatted_urls, &input) {
            Ok(page_urls) => return Ok(Some(page_urls)),
            Err(PageRangeError::CountMismatch { .. }) => {
                console.danger(
                    "User Error: The number of page numbers entered does not match the number of URLs entered",
                )?;
            }
            Err(PageRangeError::Invalid(token)) => {
                console.danger(&format!("User Error: The page number, {token}, is invalid."))?;
                console.danger("Please enter in the correct format such as '1, 1-3' and try again.")?;
            }
        }
    }
}
