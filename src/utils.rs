use std::{io, path::Path};

use futures::StreamExt;

/// Whether `path` exists and is a regular file.
pub async fn file_exists(path: &Path) -> bool {
    async_fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

/// Whether `path` exists and is a directory.
pub async fn folder_exists(path: &Path) -> bool {
    async_fs::metadata(path)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}

/// Removes `path` if it is a file. Returns whether something was removed.
pub async fn remove_file(path: &Path) -> io::Result<bool> {
    if !file_exists(path).await {
        return Ok(false);
    }
    async_fs::remove_file(path).await?;
    Ok(true)
}

/// Removes `path` if it is an empty directory. Returns whether it was removed.
pub async fn remove_folder_if_empty(path: &Path) -> io::Result<bool> {
    if !folder_exists(path).await {
        return Ok(false);
    }

    let mut entries = async_fs::read_dir(path).await?;
    if entries.next().await.is_some() {
        return Ok(false);
    }

    async_fs::remove_dir(path).await?;
    Ok(true)
}
