//! Screen routes and the authentication guard in front of them.

use crate::{AppError, AppResult};

use hr_auth::SessionStore;
use hr_core::UserRole;

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use log::debug;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Auth,
    Dashboard,
    Employees,
    Attendance,
    Leave,
    LeaveApprovals,
    Payroll,
    Profile,
    Reports,
}

impl Route {
    pub const ALL: [Route; 10] = [
        Route::Landing,
        Route::Auth,
        Route::Dashboard,
        Route::Employees,
        Route::Attendance,
        Route::Leave,
        Route::LeaveApprovals,
        Route::Payroll,
        Route::Profile,
        Route::Reports,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Auth => "/auth",
            Self::Dashboard => "/dashboard",
            Self::Employees => "/employees",
            Self::Attendance => "/attendance",
            Self::Leave => "/leave",
            Self::LeaveApprovals => "/leave-approvals",
            Self::Payroll => "/payroll",
            Self::Profile => "/profile",
            Self::Reports => "/reports",
        }
    }

    /// Reachable without a session.
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Landing | Self::Auth)
    }
}

impl FromStr for Route {
    type Err = AppError;

    #[track_caller]
    fn from_str(s: &str) -> AppResult<Self> {
        let trimmed = s.trim();
        let path = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };

        Route::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .ok_or_else(|| AppError::UnknownRoute {
                path: trimmed.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}

/// Outcome of navigating to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "route", rename_all = "snake_case")]
pub enum Guard {
    Allow(Route),
    Redirect(Route),
}

/// Protected routes need an active session; anonymous visitors go to `/auth`.
///
/// Roles are not checked here. Which screens a role sees comes from
/// [`navigation`].
pub fn guard(store: &SessionStore, route: Route) -> Guard {
    if route.is_public() || store.is_authenticated() {
        Guard::Allow(route)
    } else {
        debug!("Redirecting anonymous visit of {route} to {}", Route::Auth);
        Guard::Redirect(Route::Auth)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
}

const fn item(route: Route, label: &'static str) -> NavItem {
    NavItem { route, label }
}

/// Sidebar entries for a role.
pub fn navigation(role: UserRole) -> Vec<NavItem> {
    match role {
        UserRole::Admin => vec![
            item(Route::Dashboard, "Dashboard"),
            item(Route::Employees, "Employees"),
            item(Route::Attendance, "Attendance"),
            item(Route::LeaveApprovals, "Leave Approvals"),
            item(Route::Payroll, "Payroll"),
            item(Route::Reports, "Reports"),
        ],
        UserRole::Employee => vec![
            item(Route::Dashboard, "Dashboard"),
            item(Route::Profile, "My Profile"),
            item(Route::Attendance, "Attendance"),
            item(Route::Leave, "Leave"),
            item(Route::Payroll, "Payroll"),
        ],
    }
}
