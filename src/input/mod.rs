//! Interactive collection of what the user wants to download.
//!
//! - [`get_user_urls`] - asks for post or creator URLs and, for creator
//!   pages, the page ranges to walk
//! - [`get_user_download_choices`] - asks which parts of each post to keep

mod choices;
mod urls;

pub use choices::get_user_download_choices;
pub use urls::get_user_urls;
