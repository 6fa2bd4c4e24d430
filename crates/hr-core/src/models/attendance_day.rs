use crate::AttendanceStatus;

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// One calendar cell of the attendance screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDay {
    pub date: NaiveDate,
    /// None for weekends and days that have not happened yet
    pub status: Option<AttendanceStatus>,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
}

impl AttendanceDay {
    pub fn unrecorded(date: NaiveDate) -> Self {
        Self {
            date,
            status: None,
            check_in: None,
            check_out: None,
        }
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Hours between check-in and check-out, when both are known.
    pub fn work_hours(&self) -> Option<f64> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) if check_out > check_in => {
                Some((check_out - check_in).num_minutes() as f64 / 60.0)
            }
            _ => None,
        }
    }
}
