//! hr-app - application state, route guard and the view model of every screen.
//!
//! Screens are plain functions over [`AppState`] returning serializable views;
//! the shell decides how to render them.

pub mod app_state;
pub mod attendance_calendar;
pub mod calendar_month;
pub mod check_in_state;
pub mod error;
pub mod leave_book;
pub mod routes;
pub mod screens;

pub use app_state::AppState;
pub use attendance_calendar::{AttendanceCalendar, AttendanceSummary};
pub use calendar_month::CalendarMonth;
pub use check_in_state::{CheckInState, Shift};
pub use error::{AppError, Result, Result as AppResult};
pub use leave_book::{LeaveBook, LeaveCounts, LeaveForm};
pub use routes::{Guard, NavItem, Route, guard, navigation};
pub use screens::{
    attendance::AttendanceView,
    dashboard::{DashboardStats, DashboardView},
    employees::{EmployeeCard, EmployeeDirectoryView, EmployeeFilter},
    leave::LeaveView,
    payroll::PayrollView,
    profile::ProfileView,
    reports::ReportsView,
};

#[cfg(test)]
mod tests;
