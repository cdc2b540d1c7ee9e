use std::io::{BufRead, Write};

use crate::{
    console::Console,
    prompt::{Prompt, PromptError},
    types::{DownloadChoices, Site},
};

/// Asks a y/n/x question. `None` means the user cancelled.
fn ask_flag<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    message: &str,
) -> Result<Option<bool>, PromptError> {
    let answer = Prompt::new(message)
        .inputs(&["y", "n", "x"])
        .default("y")
        .ask(console)?;

    Ok(match answer.as_str() {
        "x" => None,
        other => Some(other == "y"),
    })
}

/// Asks which parts of each post to download.
///
/// Google Drive and other host link questions are only asked for Pixiv
/// Fanbox. With `block_gdrive` the Google Drive question is skipped and
/// answered with no. Returns `None` if the user cancels at any question.
pub fn get_user_download_choices<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    site: Site,
    block_gdrive: bool,
) -> Result<Option<DownloadChoices>, PromptError> {
    loop {
        let Some(images) = ask_flag(console, "Download images? (Y/n/x to cancel): ")? else {
            return Ok(None);
        };
        let Some(thumbnail) = ask_flag(console, "Download thumbnail? (Y/n/x to cancel): ")? else {
            return Ok(None);
        };
        let Some(attachments) = ask_flag(console, "Download attachments? (Y/n/x to cancel): ")?
        else {
            return Ok(None);
        };

        let mut choices = DownloadChoices {
            images,
            thumbnail,
            attachments,
            gdrive_links: None,
            detect_other_links: None,
        };

        if site != Site::Fantia {
            let gdrive_links = if block_gdrive {
                false
            } else {
                match ask_flag(console, "Download Google Drive links? (Y/n/x to cancel): ")? {
                    Some(flag) => flag,
                    None => return Ok(None),
                }
            };

            let Some(detect_other_links) = ask_flag(
                console,
                "Detect other download links such as MEGA links? (Y/n/x to cancel): ",
            )?
            else {
                return Ok(None);
            };

            choices.gdrive_links = Some(gdrive_links);
            choices.detect_other_links = Some(detect_other_links);
        }

        if choices.any() {
            return Ok(Some(choices));
        }
        console.danger("Please select at least one download option...\n")?;
    }
}
