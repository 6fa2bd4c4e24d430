//! Leave request - time off asked for by an identity, decided by an admin.

use crate::{CoreError, CoreResult, Identity, IdentityId, LeaveStatus, LeaveType};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Admin outcome for a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveDecision {
    Approve,
    Reject,
}

impl LeaveDecision {
    pub fn status(&self) -> LeaveStatus {
        match self {
            Self::Approve => LeaveStatus::Approved,
            Self::Reject => LeaveStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: Uuid,
    pub user_id: IdentityId,
    /// Requester's display name at submission time
    pub user_name: String,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    /// Inclusive
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub admin_comment: Option<String>,
    pub created_on: NaiveDate,
}

impl LeaveRequest {
    /// Create a pending request for `requester`.
    ///
    /// Fails when the range is inverted or the reason is blank.
    #[track_caller]
    pub fn new(
        requester: &Identity,
        leave_type: LeaveType,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: String,
        created_on: NaiveDate,
    ) -> CoreResult<Self> {
        if end_date < start_date {
            return Err(CoreError::validation(
                format!("end date {end_date} is before start date {start_date}"),
                Some("end_date"),
            ));
        }

        let reason = reason.trim().to_string();
        if reason.is_empty() {
            return Err(CoreError::validation(
                "reason cannot be empty",
                Some("reason"),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_id: requester.id,
            user_name: requester.full_name(),
            leave_type,
            start_date,
            end_date,
            reason,
            status: LeaveStatus::Pending,
            admin_comment: None,
            created_on,
        })
    }

    /// Number of calendar days covered, both ends included.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending
    }

    /// Record an admin decision. Decided requests are final.
    #[track_caller]
    pub fn decide(&mut self, decision: LeaveDecision, comment: impl Into<String>) -> CoreResult<()> {
        if self.status.is_terminal() {
            return Err(CoreError::validation(
                format!("leave request {} is already {}", self.id, self.status),
                Some("status"),
            ));
        }

        self.status = decision.status();
        self.admin_comment = Some(comment.into());
        Ok(())
    }
}
