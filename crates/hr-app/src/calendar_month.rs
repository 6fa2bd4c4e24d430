use crate::{AppError, AppResult};

use std::panic::Location;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use error_location::ErrorLocation;
use serde::Serialize;

/// A year and 1-based month, as shown above the attendance calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
}

impl CalendarMonth {
    /// Month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Every date of the month in order. Empty for an out-of-range month.
    pub fn days(&self) -> Vec<NaiveDate> {
        let Some(first) = self.first_day() else {
            return Vec::new();
        };
        first
            .iter_days()
            .take_while(|date| date.month() == self.month)
            .collect()
    }

    pub fn previous(&self) -> Self {
        self.shift(|date| date.checked_sub_months(Months::new(1)))
    }

    pub fn next(&self) -> Self {
        self.shift(|date| date.checked_add_months(Months::new(1)))
    }

    fn shift(&self, step: impl Fn(NaiveDate) -> Option<NaiveDate>) -> Self {
        self.first_day().and_then(step).map_or(*self, Self::of)
    }

    /// "February 2024"
    pub fn label(&self) -> String {
        match self.first_day() {
            Some(first) => first.format("%B %Y").to_string(),
            None => format!("{:04}-{:02}", self.year, self.month),
        }
    }
}

impl FromStr for CalendarMonth {
    type Err = AppError;

    /// Parses `YYYY-MM`.
    #[track_caller]
    fn from_str(s: &str) -> AppResult<Self> {
        let location = ErrorLocation::from(Location::caller());
        let parsed = s.trim().split_once('-').and_then(|(year, month)| {
            let year = year.parse::<i32>().ok()?;
            let month = month.parse::<u32>().ok()?;
            NaiveDate::from_ymd_opt(year, month, 1).map(Self::of)
        });

        parsed.ok_or_else(|| AppError::InvalidMonth {
            value: s.to_string(),
            location,
        })
    }
}

impl std::fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
