use crate::{
    Res,
    config::AppPaths,
    console::Console,
    danger, info,
    input::{get_user_download_choices, get_user_urls},
    management::ConfigManager,
    spinner::check_internet_connection,
    success,
    types::{PageKind, Selection, Site},
    warning,
};

pub async fn download(paths: &AppPaths, site: Site, creator: bool, block_gdrive: bool) -> Res<()> {
    if !check_internet_connection().await {
        danger!("No active internet connection found. Please check your connection and try again.");
        return Ok(());
    }

    let config = ConfigManager::load(paths).await?;
    let mut console = Console::stdio();

    let Some(choices) = get_user_download_choices(&mut console, site, block_gdrive)? else {
        warning!("Download cancelled.");
        return Ok(());
    };

    let kind = if creator {
        PageKind::Creator
    } else {
        PageKind::Post
    };

    let urls = match get_user_urls(&mut console, site, kind)? {
        Selection::Cancelled => {
            warning!("Download cancelled.");
            return Ok(());
        }
        Selection::Empty => {
            warning!("No URLs to download.");
            return Ok(());
        }
        Selection::Items(urls) => urls,
    };

    tracing::info!(
        site = site.key(),
        ?kind,
        ?choices,
        count = urls.len(),
        "download selection resolved"
    );

    info!(
        "Downloading from {} into {}",
        site,
        config.config().download_directory
    );
    for url in &urls {
        info!("{}", url);
    }
    success!("{} URL(s) queued for download.", urls.len());
    Ok(())
}
