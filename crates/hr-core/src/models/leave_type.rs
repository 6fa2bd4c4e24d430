use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    #[default]
    Paid,
    Sick,
    Unpaid,
}

impl LeaveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Sick => "sick",
            Self::Unpaid => "unpaid",
        }
    }

    /// Label shown on request cards ("Paid Leave").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Paid => "Paid Leave",
            Self::Sick => "Sick Leave",
            Self::Unpaid => "Unpaid Leave",
        }
    }
}

impl FromStr for LeaveType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "paid" => Ok(Self::Paid),
            "sick" => Ok(Self::Sick),
            "unpaid" => Ok(Self::Unpaid),
            _ => Err(CoreError::InvalidLeaveType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
