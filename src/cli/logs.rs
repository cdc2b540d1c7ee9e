use crate::{Res, info, logger::Logger};

pub fn show_log_path(logger: &Logger) -> Res<()> {
    info!("Current log file: {}", logger.path().display());
    Ok(())
}
