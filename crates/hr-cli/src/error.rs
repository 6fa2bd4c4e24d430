use hr_app::AppError;
use hr_auth::AuthError;
use hr_config::ConfigError;
use hr_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("{source}")]
    App {
        #[source]
        source: AppError,
        location: ErrorLocation,
    },

    #[error("Usage error: {message} {location}")]
    Usage {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON serialization failed: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("I/O error: {source} {location}")]
    Io {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "CONFIG_ERROR",
            Self::App { source, .. } => source.error_code(),
            Self::Usage { .. } => "USAGE",
            Self::Json { .. } => "SERIALIZATION_ERROR",
            Self::Io { .. } => "IO_ERROR",
            Self::Logger { .. } => "LOGGER_ERROR",
        }
    }

    /// `{"error": {"code", "message", "field"?}}` as printed by the shell.
    pub fn to_json(&self) -> Value {
        let (message, field) = match self {
            Self::App { source, .. } => (source.user_message(), source.field()),
            Self::Usage { message, .. } => (message.clone(), None),
            other => (other.to_string(), None),
        };

        let mut body = json!({
            "code": self.error_code(),
            "message": message,
        });
        if let Some(field) = field {
            body["field"] = Value::String(field);
        }
        json!({ "error": body })
    }
}

impl From<ConfigError> for CliError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AppError> for CliError {
    #[track_caller]
    fn from(source: AppError) -> Self {
        Self::App {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for CliError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::from(AppError::from(source))
    }
}

impl From<CoreError> for CliError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::from(AppError::from(source))
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for CliError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
