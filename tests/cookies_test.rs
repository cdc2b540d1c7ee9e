use std::{fs, io::Cursor};

use culturedcli::config::AppPaths;
use culturedcli::console::Console;
use culturedcli::management::CookieManager;
use culturedcli::types::Site;
use tempfile::TempDir;

type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

fn console(input: &str) -> TestConsole {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output(console: &TestConsole) -> String {
    String::from_utf8_lossy(console.writer()).into_owned()
}

// Helper function to create an app root with cookies saved for `sites`
fn setup(sites: &[Site]) -> (TempDir, AppPaths) {
    let dir = tempfile::tempdir().unwrap();
    let paths = AppPaths::at(dir.path());
    for site in sites {
        fs::create_dir_all(paths.cookies_dir()).unwrap();
        fs::write(paths.cookie_file(*site), "session=abc").unwrap();
    }
    (dir, paths)
}

#[test]
fn test_cookie_path_layout() {
    let paths = AppPaths::at("/app");
    let manager = CookieManager::new(paths.clone());

    assert_eq!(
        manager.cookie_path(Site::Fantia),
        paths.cookies_dir().join("fantia_cookies")
    );
    assert_eq!(
        manager.cookie_path(Site::PixivFanbox),
        paths.cookies_dir().join("pixiv_fanbox_cookies")
    );
}

#[tokio::test]
async fn test_has_cookies() {
    let (_dir, paths) = setup(&[Site::PixivFanbox]);
    let manager = CookieManager::new(paths);

    assert!(manager.has_cookies(Site::PixivFanbox).await);
    assert!(!manager.has_cookies(Site::Fantia).await);
    assert!(manager.user_has_saved_cookies().await);
}

#[tokio::test]
async fn test_no_saved_cookies() {
    let (_dir, paths) = setup(&[]);
    let manager = CookieManager::new(paths);
    assert!(!manager.user_has_saved_cookies().await);
}

#[tokio::test]
async fn test_delete_without_cookies_asks_nothing() {
    let (_dir, paths) = setup(&[]);
    let manager = CookieManager::new(paths);

    let mut console = console("y\n");
    assert!(!manager.delete_cookies(&mut console, Site::Fantia).await.unwrap());
    assert!(output(&console).is_empty());
}

#[tokio::test]
async fn test_delete_defaults_to_keeping_cookies() {
    let (_dir, paths) = setup(&[Site::Fantia]);
    let manager = CookieManager::new(paths.clone());

    let mut console = console("\n");
    assert!(!manager.delete_cookies(&mut console, Site::Fantia).await.unwrap());
    assert!(paths.cookie_file(Site::Fantia).exists());
    assert!(output(&console).contains("Do you want to delete your saved cookies for Fantia as well? (y/N): "));
}

#[tokio::test]
async fn test_delete_removes_file_and_empty_folder() {
    let (_dir, paths) = setup(&[Site::Fantia]);
    let manager = CookieManager::new(paths.clone());

    let mut console = console("y\n");
    assert!(manager.delete_cookies(&mut console, Site::Fantia).await.unwrap());

    assert!(!paths.cookie_file(Site::Fantia).exists());
    assert!(!paths.cookies_dir().exists());
    assert!(output(&console).contains("Successfully deleted your saved cookies for Fantia."));
}

#[tokio::test]
async fn test_delete_keeps_folder_with_other_cookies() {
    let (_dir, paths) = setup(&[Site::Fantia, Site::PixivFanbox]);
    let manager = CookieManager::new(paths.clone());

    let mut console = console("y\n");
    assert!(manager.delete_cookies(&mut console, Site::PixivFanbox).await.unwrap());

    assert!(paths.cookie_file(Site::Fantia).exists());
    assert!(paths.cookies_dir().exists());
}
