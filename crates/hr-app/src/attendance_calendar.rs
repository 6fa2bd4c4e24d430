//! Generated attendance month.
//!
//! Nothing is recorded anywhere, so past weekdays get a random status drawn
//! from a fixed weighting. Weekends and days from today onward stay empty.

use crate::CalendarMonth;

use hr_core::{AttendanceDay, AttendanceStatus};

use chrono::{NaiveDate, NaiveTime};
use rand::Rng;
use serde::Serialize;

/// Five presents to one of each other status.
const STATUS_WEIGHTS: [AttendanceStatus; 8] = [
    AttendanceStatus::Present,
    AttendanceStatus::Present,
    AttendanceStatus::Present,
    AttendanceStatus::Present,
    AttendanceStatus::Present,
    AttendanceStatus::HalfDay,
    AttendanceStatus::Absent,
    AttendanceStatus::Leave,
];

const CHECK_IN: NaiveTime = on_the_hour(9);
const FULL_DAY_CHECK_OUT: NaiveTime = on_the_hour(18);
const HALF_DAY_CHECK_OUT: NaiveTime = on_the_hour(13);

const fn on_the_hour(hour: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, 0, 0) {
        Some(time) => time,
        None => panic!("hour out of range"),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceSummary {
    pub present: usize,
    pub absent: usize,
    pub half_day: usize,
    pub leave: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceCalendar {
    pub month: CalendarMonth,
    pub days: Vec<AttendanceDay>,
}

impl AttendanceCalendar {
    pub fn generate<R: Rng>(month: CalendarMonth, today: NaiveDate, rng: &mut R) -> Self {
        let days = month
            .days()
            .into_iter()
            .map(|date| {
                let mut day = AttendanceDay::unrecorded(date);
                if day.is_weekend() || date >= today {
                    return day;
                }

                let status = STATUS_WEIGHTS[rng.random_range(0..STATUS_WEIGHTS.len())];
                day.status = Some(status);
                day.check_in = (status != AttendanceStatus::Absent).then_some(CHECK_IN);
                day.check_out = match status {
                    AttendanceStatus::Present => Some(FULL_DAY_CHECK_OUT),
                    AttendanceStatus::HalfDay => Some(HALF_DAY_CHECK_OUT),
                    AttendanceStatus::Absent | AttendanceStatus::Leave => None,
                };
                day
            })
            .collect();

        Self { month, days }
    }

    pub fn summary(&self) -> AttendanceSummary {
        self.days
            .iter()
            .filter_map(|day| day.status)
            .fold(AttendanceSummary::default(), |mut summary, status| {
                match status {
                    AttendanceStatus::Present => summary.present += 1,
                    AttendanceStatus::Absent => summary.absent += 1,
                    AttendanceStatus::HalfDay => summary.half_day += 1,
                    AttendanceStatus::Leave => summary.leave += 1,
                }
                summary
            })
    }

    pub fn day(&self, date: NaiveDate) -> Option<&AttendanceDay> {
        self.days.iter().find(|day| day.date == date)
    }
}
