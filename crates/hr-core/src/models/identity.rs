//! Identity - a person in the HR directory, employee or administrator.

use crate::UserRole;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type IdentityId = Uuid;

/// Placeholder used for organizational fields of self-registered identities.
pub const UNASSIGNED: &str = "To be assigned";

/// A user record. Never deleted; only contact details change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: IdentityId,
    /// Company-issued number (e.g., "EMP001"), not guaranteed unique
    pub employee_id: String,
    /// Login email, matched exactly
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub department: String,
    pub position: String,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub joining_date: NaiveDate,
    /// Annual salary in whole dollars
    pub salary: u64,
}

impl Identity {
    /// Create a self-registered identity with placeholder organizational fields.
    pub fn registered(
        employee_id: String,
        email: String,
        first_name: String,
        last_name: String,
        role: UserRole,
        joining_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id,
            email,
            first_name,
            last_name,
            role,
            department: UNASSIGNED.to_string(),
            position: UNASSIGNED.to_string(),
            avatar: None,
            phone: None,
            address: None,
            joining_date,
            salary: 0,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// First letter of each name part, used where no avatar is set.
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect()
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Annual salary spread over twelve months, rounded to the nearest dollar.
    pub fn monthly_salary(&self) -> u64 {
        (self.salary + 6) / 12
    }
}
