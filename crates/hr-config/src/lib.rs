mod attendance_config;
mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;

pub use attendance_config::AttendanceConfig;
pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

/// Environment variable that relocates the config directory.
pub const CONFIG_DIR_ENV: &str = "HR_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".hr";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_SIMULATED_LATENCY_MS: u64 = 1000;
const MAX_SIMULATED_LATENCY_MS: u64 = 10_000;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
