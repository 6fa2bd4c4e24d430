pub use error_location::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid user role: {value} {location}")]
    InvalidUserRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid leave type: {value} {location}")]
    InvalidLeaveType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid leave status: {value} {location}")]
    InvalidLeaveStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid attendance status: {value} {location}")]
    InvalidAttendanceStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid payroll status: {value} {location}")]
    InvalidPayrollStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid date for {field}: {value} {location}")]
    InvalidDate {
        field: String,
        value: String,
        #[source]
        source: chrono::ParseError,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Creates a Validation error at caller location.
    #[track_caller]
    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
