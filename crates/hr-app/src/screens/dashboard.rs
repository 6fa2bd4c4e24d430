//! Landing screen after sign-in.
//!
//! Admins get organization totals computed from the directory and leave book.
//! Employees get their own month at a glance.

use crate::{AppResult, AppState, CalendarMonth, Route};

use hr_core::{LeaveBalance, UserRole};

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

/// Shown until reviews exist.
const PERFORMANCE_PERCENT: u8 = 94;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum DashboardStats {
    Admin {
        total_employees: usize,
        present_today: usize,
        pending_leaves: usize,
        monthly_payroll: u64,
    },
    Employee {
        days_present: usize,
        paid_leave_balance: Option<u32>,
        net_salary: u64,
        performance_percent: u8,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub route: Route,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Attendance,
    LeaveApproved,
    LeaveRejected,
    LeavePending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub kind: ActivityKind,
    pub message: &'static str,
    pub time: &'static str,
}

pub const RECENT_ACTIVITY: [Activity; 4] = [
    Activity {
        kind: ActivityKind::Attendance,
        message: "Checked in at 9:00 AM",
        time: "2 hours ago",
    },
    Activity {
        kind: ActivityKind::LeaveApproved,
        message: "Annual leave request approved",
        time: "Yesterday",
    },
    Activity {
        kind: ActivityKind::LeavePending,
        message: "Sick leave request pending",
        time: "2 days ago",
    },
    Activity {
        kind: ActivityKind::Attendance,
        message: "Checked out at 6:00 PM",
        time: "3 days ago",
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub greeting: String,
    pub date: String,
    pub stats: DashboardStats,
    pub quick_actions: Vec<QuickAction>,
    pub recent_activity: Vec<Activity>,
}

const fn action(title: &'static str, description: &'static str, route: Route) -> QuickAction {
    QuickAction {
        title,
        description,
        route,
    }
}

fn quick_actions(role: UserRole) -> Vec<QuickAction> {
    match role {
        UserRole::Admin => vec![
            action(
                "Manage Employees",
                "View and edit employee profiles",
                Route::Employees,
            ),
            action(
                "Attendance Reports",
                "View daily & weekly attendance",
                Route::Attendance,
            ),
            action(
                "Leave Approvals",
                "Review pending leave requests",
                Route::LeaveApprovals,
            ),
            action(
                "Generate Reports",
                "Download HR analytics & reports",
                Route::Reports,
            ),
        ],
        UserRole::Employee => vec![
            action("My Profile", "View and update your details", Route::Profile),
            action(
                "Attendance History",
                "Check your attendance records",
                Route::Attendance,
            ),
            action("Leave Requests", "Apply or check leave status", Route::Leave),
            action(
                "Salary Details",
                "View your payroll information",
                Route::Payroll,
            ),
        ],
    }
}

pub fn greeting(first_name: &str, now: NaiveDateTime) -> String {
    let part_of_day = match now.hour() {
        0..12 => "morning",
        12..17 => "afternoon",
        _ => "evening",
    };
    format!("Good {part_of_day}, {first_name}!")
}

pub fn view(state: &mut AppState, now: NaiveDateTime) -> AppResult<DashboardView> {
    let today = now.date();
    let identity = state.identity()?;
    let role = identity.role;
    let greeting = greeting(&identity.first_name, now);

    let stats = match role {
        UserRole::Admin => {
            let identities: Vec<_> = state.directory().collect();
            let on_leave = identities
                .iter()
                .filter(|i| state.leave_book.on_leave(i.id, today))
                .count();
            let annual_total: u64 = identities.iter().map(|i| i.salary).sum();

            DashboardStats::Admin {
                total_employees: identities.len(),
                present_today: identities.len() - on_leave,
                pending_leaves: state.leave_book.counts().pending,
                monthly_payroll: annual_total / 12,
            }
        }
        UserRole::Employee => {
            let net_salary = state.salary_breakdown.net();
            let calendar = state.calendar(CalendarMonth::of(today), today);

            DashboardStats::Employee {
                days_present: calendar.summary().present,
                paid_leave_balance: LeaveBalance::default().paid,
                net_salary,
                performance_percent: PERFORMANCE_PERCENT,
            }
        }
    };

    Ok(DashboardView {
        greeting,
        date: today.format("%A, %B %-d, %Y").to_string(),
        stats,
        quick_actions: quick_actions(role),
        recent_activity: RECENT_ACTIVITY.to_vec(),
    })
}
