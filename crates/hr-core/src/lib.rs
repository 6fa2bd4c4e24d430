pub mod error;
pub mod models;
pub mod seed;

pub use error::{CoreError, ErrorLocation, Result, Result as CoreResult};
pub use models::attendance_day::AttendanceDay;
pub use models::attendance_status::AttendanceStatus;
pub use models::identity::{Identity, IdentityId, UNASSIGNED};
pub use models::leave_balance::LeaveBalance;
pub use models::leave_request::{LeaveDecision, LeaveRequest};
pub use models::leave_status::LeaveStatus;
pub use models::leave_type::LeaveType;
pub use models::payroll_record::PayrollRecord;
pub use models::payroll_status::PayrollStatus;
pub use models::salary_breakdown::SalaryBreakdown;
pub use models::user_role::UserRole;

use std::panic::Location;

use chrono::NaiveDate;

/// Date format used on every screen and in seed data (`2024-02-15`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date, naming the offending field on failure.
#[track_caller]
pub fn parse_date(value: &str, field: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|source| {
        CoreError::InvalidDate {
            field: field.to_string(),
            value: value.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    })
}

#[cfg(test)]
mod tests;
