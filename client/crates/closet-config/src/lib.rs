mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod startup_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use startup_config::StartupConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "CLOSET_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".closet";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_BASE_URL: &str = "http://192.168.88.66:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;
const DEFAULT_AUTH_SCHEME: &str = "Token";
const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";

const DEFAULT_MIN_DURATION_MS: u64 = 3000;
const MAX_MIN_DURATION_MS: u64 = 10_000;
const DEFAULT_ANIMATION_GRACE_MS: u64 = 500;
const MAX_ANIMATION_GRACE_MS: u64 = 5_000;

const DEFAULT_SESSION_FILE: &str = "session.json";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
