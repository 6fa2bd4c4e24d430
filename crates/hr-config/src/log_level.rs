use crate::DEFAULT_LOG_LEVEL;

use std::convert::Infallible;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Deserializer};

/// `[logging] level` setting.
///
/// Never rejects a config file: a misspelled or non-string level runs the
/// shell at `info` instead of refusing to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);

impl LogLevel {
    pub const fn filter(self) -> LevelFilter {
        self.0
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel(DEFAULT_LOG_LEVEL)
    }
}

impl FromStr for LogLevel {
    type Err = Infallible;

    /// Case-insensitive level name; anything else is the default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.trim()
            .parse::<LevelFilter>()
            .map(LogLevel)
            .unwrap_or_default())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let level = match String::deserialize(deserializer) {
            Ok(name) => LogLevel::from_str(&name).unwrap_or_default(),
            Err(_) => LogLevel::default(),
        };
        Ok(level)
    }
}
