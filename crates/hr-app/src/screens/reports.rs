use crate::{AppResult, AppState};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportKind {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecentReport {
    pub name: &'static str,
    pub date: &'static str,
    pub size: &'static str,
}

pub const CATALOG: [ReportKind; 6] = [
    ReportKind {
        key: "attendance",
        title: "Attendance Report",
        description: "Daily and monthly attendance records for all employees",
    },
    ReportKind {
        key: "payroll",
        title: "Payroll Report",
        description: "Salary breakdown and payment history",
    },
    ReportKind {
        key: "leave",
        title: "Leave Report",
        description: "Leave requests, approvals, and balances",
    },
    ReportKind {
        key: "employee",
        title: "Employee Report",
        description: "Complete employee directory and details",
    },
    ReportKind {
        key: "performance",
        title: "Performance Report",
        description: "Team productivity and performance metrics",
    },
    ReportKind {
        key: "analytics",
        title: "HR Analytics",
        description: "Comprehensive HR insights and trends",
    },
];

pub const RECENT: [RecentReport; 4] = [
    RecentReport {
        name: "Attendance_Jan_2024.pdf",
        date: "Jan 31, 2024",
        size: "2.4 MB",
    },
    RecentReport {
        name: "Payroll_Jan_2024.pdf",
        date: "Jan 31, 2024",
        size: "1.8 MB",
    },
    RecentReport {
        name: "Leave_Summary_Q4_2023.pdf",
        date: "Jan 15, 2024",
        size: "892 KB",
    },
    RecentReport {
        name: "Employee_Directory.xlsx",
        date: "Jan 10, 2024",
        size: "456 KB",
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct ReportsView {
    pub catalog: Vec<ReportKind>,
    pub recent: Vec<RecentReport>,
}

/// Display only; nothing is generated.
pub fn view(state: &AppState) -> AppResult<ReportsView> {
    state.identity()?;
    Ok(ReportsView {
        catalog: CATALOG.to_vec(),
        recent: RECENT.to_vec(),
    })
}
