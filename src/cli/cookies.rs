use crate::{
    Res, config::AppPaths, console::Console, info, management::CookieManager, types::Site,
};

pub async fn delete_cookies(paths: &AppPaths, site: Site) -> Res<()> {
    let cookies = CookieManager::new(paths.clone());
    if !cookies.has_cookies(site).await {
        info!("No saved cookies for {}.", site);
        return Ok(());
    }

    let mut console = Console::stdio();
    cookies.delete_cookies(&mut console, site).await?;
    Ok(())
}
