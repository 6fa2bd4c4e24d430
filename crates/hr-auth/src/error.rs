use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown email and wrong secret map to this same variant.
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Not authenticated {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error("Invalid signup field '{field}': {message} {location}")]
    Signup {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_authenticated() -> Self {
        Self::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn signup(field: &'static str, message: impl Into<String>) -> Self {
        Self::Signup {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::NotAuthenticated { .. } => "NOT_AUTHENTICATED",
            Self::Signup { .. } => "INVALID_SIGNUP",
        }
    }

    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Signup { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Message fit for the person at the keyboard (no source location).
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials { .. } => String::from("Invalid email or password"),
            Self::NotAuthenticated { .. } => String::from("Please sign in to continue"),
            Self::Signup { message, .. } => message.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
