//! Leave book - every leave request in the running app, newest first.

use crate::{AppError, AppResult};

use hr_core::{
    Identity, IdentityId, LeaveDecision, LeaveRequest, LeaveStatus, LeaveType, seed,
};

use std::panic::Location;

use chrono::NaiveDate;
use error_location::ErrorLocation;
use log::info;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Employee-submitted leave form.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveForm {
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LeaveCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone, Default)]
pub struct LeaveBook {
    requests: Vec<LeaveRequest>,
}

impl LeaveBook {
    pub fn new(requests: Vec<LeaveRequest>) -> Self {
        Self { requests }
    }

    pub fn seeded() -> Self {
        Self::new(seed::leave_requests())
    }

    pub fn requests(&self) -> &[LeaveRequest] {
        &self.requests
    }

    pub fn for_user(&self, user_id: IdentityId) -> impl Iterator<Item = &LeaveRequest> {
        self.requests.iter().filter(move |r| r.user_id == user_id)
    }

    pub fn pending(&self) -> impl Iterator<Item = &LeaveRequest> {
        self.requests.iter().filter(|r| r.is_pending())
    }

    pub fn counts(&self) -> LeaveCounts {
        self.requests
            .iter()
            .fold(LeaveCounts::default(), |mut counts, request| {
                match request.status {
                    LeaveStatus::Pending => counts.pending += 1,
                    LeaveStatus::Approved => counts.approved += 1,
                    LeaveStatus::Rejected => counts.rejected += 1,
                }
                counts
            })
    }

    /// Approved leave covering `date`.
    pub fn on_leave(&self, user_id: IdentityId, date: NaiveDate) -> bool {
        self.for_user(user_id).any(|r| {
            r.status == LeaveStatus::Approved && r.start_date <= date && date <= r.end_date
        })
    }

    /// Add a pending request at the top of the book.
    #[track_caller]
    pub fn submit(
        &mut self,
        requester: &Identity,
        form: LeaveForm,
        today: NaiveDate,
    ) -> AppResult<&LeaveRequest> {
        let request = LeaveRequest::new(
            requester,
            form.leave_type,
            form.start_date,
            form.end_date,
            form.reason,
            today,
        )?;

        info!(
            "{} requested {} day(s) of {} leave from {}",
            request.user_name,
            request.days(),
            request.leave_type,
            request.start_date
        );

        self.requests.insert(0, request);
        Ok(&self.requests[0])
    }

    /// Approve or reject a pending request.
    #[track_caller]
    pub fn decide(
        &mut self,
        id: Uuid,
        decision: LeaveDecision,
        comment: impl Into<String>,
    ) -> AppResult<&LeaveRequest> {
        let request = self
            .requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::leave_not_found(id))?;

        if !request.is_pending() {
            return Err(AppError::LeaveAlreadyDecided {
                id,
                status: request.status,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        request.decide(decision, comment)?;
        info!("Leave request {id} of {} {}", request.user_name, request.status);
        Ok(&*request)
    }
}
