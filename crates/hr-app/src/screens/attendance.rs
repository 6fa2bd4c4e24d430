//! Attendance screen and the employee check-in clock.

use crate::{AppError, AppResult, AppState, AttendanceSummary, CalendarMonth, CheckInState, Shift};

use hr_core::{AttendanceDay, UserRole};

use chrono::{NaiveDate, NaiveDateTime};
use log::info;
use serde::Serialize;

/// Rows in the recent records table.
const RECENT_RECORDS: usize = 7;

#[derive(Debug, Clone, Serialize)]
pub struct AttendanceView {
    pub title: &'static str,
    pub month: CalendarMonth,
    pub label: String,
    pub previous: CalendarMonth,
    pub next: CalendarMonth,
    pub summary: AttendanceSummary,
    pub days: Vec<AttendanceDay>,
    pub recent: Vec<AttendanceDay>,
    /// Only employees have a clock
    pub check_in: Option<CheckInState>,
}

pub fn view(
    state: &mut AppState,
    month: Option<CalendarMonth>,
    today: NaiveDate,
) -> AppResult<AttendanceView> {
    let role = state.identity()?.role;
    let check_in = match role {
        UserRole::Admin => None,
        UserRole::Employee => Some(state.check_in),
    };

    let month = month.unwrap_or_else(|| CalendarMonth::of(today));
    let calendar = state.calendar(month, today);

    Ok(AttendanceView {
        title: match role {
            UserRole::Admin => "Attendance Management",
            UserRole::Employee => "My Attendance",
        },
        month,
        label: month.label(),
        previous: month.previous(),
        next: month.next(),
        summary: calendar.summary(),
        recent: calendar
            .days
            .iter()
            .filter(|day| day.status.is_some())
            .take(RECENT_RECORDS)
            .cloned()
            .collect(),
        days: calendar.days.clone(),
        check_in,
    })
}

#[track_caller]
fn require_employee(state: &AppState) -> AppResult<()> {
    match state.identity()?.role {
        UserRole::Employee => Ok(()),
        UserRole::Admin => Err(AppError::attendance(
            "Check-in is only available to employees",
        )),
    }
}

pub fn check_in(state: &mut AppState, now: NaiveDateTime) -> AppResult<CheckInState> {
    require_employee(state)?;
    state.check_in.check_in(now)?;
    info!("Checked in at {}", now.format("%H:%M"));
    Ok(state.check_in)
}

pub fn check_out(state: &mut AppState, now: NaiveDateTime) -> AppResult<Shift> {
    require_employee(state)?;
    let shift = state.check_in.check_out(now)?;
    info!(
        "Checked out at {} after {} minutes",
        now.format("%H:%M"),
        shift.minutes
    );
    Ok(shift)
}
