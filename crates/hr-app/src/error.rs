use hr_auth::AuthError;
use hr_core::{CoreError, LeaveStatus};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication error: {source} {location}")]
    Auth {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },

    #[error("Domain error: {source} {location}")]
    Core {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Leave request {id} not found {location}")]
    LeaveNotFound { id: Uuid, location: ErrorLocation },

    #[error("Leave request {id} is already {status} {location}")]
    LeaveAlreadyDecided {
        id: Uuid,
        status: LeaveStatus,
        location: ErrorLocation,
    },

    #[error("Attendance error: {message} {location}")]
    Attendance {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unknown route: {path} {location}")]
    UnknownRoute {
        path: String,
        location: ErrorLocation,
    },

    #[error("Invalid month '{value}', expected YYYY-MM {location}")]
    InvalidMonth {
        value: String,
        location: ErrorLocation,
    },
}

impl AppError {
    #[track_caller]
    pub fn attendance(message: impl Into<String>) -> Self {
        Self::Attendance {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn leave_not_found(id: Uuid) -> Self {
        Self::LeaveNotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Auth { source, .. } => source.error_code(),
            Self::Core { .. } => "VALIDATION_ERROR",
            Self::LeaveNotFound { .. } => "LEAVE_NOT_FOUND",
            Self::LeaveAlreadyDecided { .. } => "LEAVE_ALREADY_DECIDED",
            Self::Attendance { .. } => "ATTENDANCE_ERROR",
            Self::UnknownRoute { .. } => "UNKNOWN_ROUTE",
            Self::InvalidMonth { .. } => "INVALID_MONTH",
        }
    }

    /// Field the error refers to, for form-style callers.
    pub fn field(&self) -> Option<String> {
        match self {
            Self::Auth { source, .. } => source.field().map(str::to_string),
            Self::Core {
                source: CoreError::Validation { field, .. },
                ..
            } => field.clone(),
            Self::Core {
                source: CoreError::InvalidDate { field, .. },
                ..
            } => Some(field.clone()),
            _ => None,
        }
    }

    /// Message without source locations.
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth { source, .. } => source.user_message(),
            Self::Core { source, .. } => match source {
                CoreError::Validation { message, .. } => message.clone(),
                CoreError::InvalidDate { field, value, .. } => {
                    format!("{field}: '{value}' is not a YYYY-MM-DD date")
                }
                CoreError::InvalidUserRole { value, .. } => format!("Unknown role '{value}'"),
                CoreError::InvalidLeaveType { value, .. } => {
                    format!("Unknown leave type '{value}'")
                }
                CoreError::InvalidLeaveStatus { value, .. } => {
                    format!("Unknown leave status '{value}'")
                }
                CoreError::InvalidAttendanceStatus { value, .. } => {
                    format!("Unknown attendance status '{value}'")
                }
                CoreError::InvalidPayrollStatus { value, .. } => {
                    format!("Unknown payroll status '{value}'")
                }
            },
            Self::LeaveNotFound { id, .. } => format!("Leave request {id} not found"),
            Self::LeaveAlreadyDecided { status, .. } => {
                format!("Leave request is already {status}")
            }
            Self::Attendance { message, .. } => message.clone(),
            Self::UnknownRoute { path, .. } => format!("No screen at {path}"),
            Self::InvalidMonth { value, .. } => {
                format!("'{value}' is not a month, expected YYYY-MM")
            }
        }
    }
}

impl From<AuthError> for AppError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::Auth {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for AppError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
