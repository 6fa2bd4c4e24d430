//! Leave screens: the employee's own requests, or the admin approvals queue.

use crate::{AppResult, AppState, LeaveCounts, LeaveForm};

use hr_core::{LeaveBalance, LeaveDecision, LeaveRequest, UserRole};

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum LeaveView {
    Approvals {
        title: &'static str,
        counts: LeaveCounts,
        requests: Vec<LeaveRequest>,
    },
    Own {
        title: &'static str,
        balance: LeaveBalance,
        requests: Vec<LeaveRequest>,
    },
}

pub fn view(state: &AppState) -> AppResult<LeaveView> {
    let identity = state.identity()?;
    let book = &state.leave_book;

    Ok(match identity.role {
        UserRole::Admin => LeaveView::Approvals {
            title: "Leave Approvals",
            counts: book.counts(),
            requests: book.requests().to_vec(),
        },
        UserRole::Employee => LeaveView::Own {
            title: "Leave Management",
            balance: LeaveBalance::default(),
            requests: book.for_user(identity.id).cloned().collect(),
        },
    })
}

/// Submit a leave request on behalf of the active identity.
pub fn request(state: &mut AppState, form: LeaveForm, today: NaiveDate) -> AppResult<LeaveRequest> {
    let requester = state.session.require_current()?;
    let request = state.leave_book.submit(requester, form, today)?;
    Ok(request.clone())
}

/// Approve or reject a pending request.
///
/// Needs a session but no particular role: anyone signed in may decide any
/// request. Roles only shape navigation, as with the route guard.
pub fn decide(
    state: &mut AppState,
    id: Uuid,
    decision: LeaveDecision,
    comment: impl Into<String>,
) -> AppResult<LeaveRequest> {
    state.identity()?;
    let request = state.leave_book.decide(id, decision, comment)?;
    Ok(request.clone())
}
