use crate::{Res, danger, spinner::check_internet_connection, success};

pub async fn check() -> Res<()> {
    if check_internet_connection().await {
        success!("Internet connection is available.");
    } else {
        danger!("No active internet connection found.");
    }
    Ok(())
}
