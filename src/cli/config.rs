use crate::{Res, config::AppPaths, console::Console, info, management::ConfigManager};

pub async fn show_config(paths: &AppPaths) -> Res<()> {
    let manager = ConfigManager::load(paths).await?;
    info!("Config file: {}", manager.path().display());
    println!("{}", serde_json::to_string_pretty(manager.config())?);
    Ok(())
}

pub async fn change_download_directory(paths: &AppPaths) -> Res<()> {
    let mut manager = ConfigManager::load(paths).await?;
    let mut console = Console::stdio();
    manager.change_download_directory(&mut console, false).await?;
    Ok(())
}
