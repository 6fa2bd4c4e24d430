use crate::{AppError, AppResult};

use chrono::NaiveDateTime;
use serde::Serialize;

/// Today's check-in clock of the active employee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CheckInState {
    #[default]
    NotCheckedIn,
    Working { since: NaiveDateTime },
}

/// A finished stretch of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shift {
    pub checked_in: NaiveDateTime,
    pub checked_out: NaiveDateTime,
    pub minutes: i64,
}

impl CheckInState {
    pub fn is_working(&self) -> bool {
        matches!(self, Self::Working { .. })
    }

    #[track_caller]
    pub fn check_in(&mut self, now: NaiveDateTime) -> AppResult<NaiveDateTime> {
        match *self {
            Self::Working { since } => Err(AppError::attendance(format!(
                "Already checked in since {}",
                since.format("%H:%M")
            ))),
            Self::NotCheckedIn => {
                *self = Self::Working { since: now };
                Ok(now)
            }
        }
    }

    #[track_caller]
    pub fn check_out(&mut self, now: NaiveDateTime) -> AppResult<Shift> {
        match *self {
            Self::NotCheckedIn => Err(AppError::attendance("Not checked in")),
            Self::Working { since } => {
                *self = Self::NotCheckedIn;
                Ok(Shift {
                    checked_in: since,
                    checked_out: now,
                    minutes: (now - since).num_minutes().max(0),
                })
            }
        }
    }
}
