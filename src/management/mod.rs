mod config;
mod cookies;

pub use config::Config;
pub use config::ConfigError;
pub use config::ConfigManager;
pub use cookies::CookieError;
pub use cookies::CookieManager;
