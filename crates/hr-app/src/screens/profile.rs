//! Profile screen of the active identity and its contact-detail edit.

use crate::{AppResult, AppState};

use hr_auth::ProfileUpdate;
use hr_core::{Identity, IdentityId, UserRole};

use chrono::NaiveDate;
use serde::Serialize;

pub const DOCUMENTS: [&str; 4] = [
    "Employment Contract",
    "ID Proof",
    "Address Proof",
    "Tax Documents",
];

#[derive(Debug, Clone, Serialize)]
pub struct PersonalDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobDetails {
    pub employee_id: String,
    pub role: UserRole,
    pub department: String,
    pub position: String,
    pub joining_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct SalaryDetails {
    pub annual: u64,
    pub monthly: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub id: IdentityId,
    pub name: String,
    pub initials: String,
    pub avatar: Option<String>,
    pub personal: PersonalDetails,
    pub job: JobDetails,
    pub salary: SalaryDetails,
    pub documents: Vec<&'static str>,
}

impl From<&Identity> for ProfileView {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id,
            name: identity.full_name(),
            initials: identity.initials(),
            avatar: identity.avatar.clone(),
            personal: PersonalDetails {
                first_name: identity.first_name.clone(),
                last_name: identity.last_name.clone(),
                email: identity.email.clone(),
                phone: identity.phone.clone(),
                address: identity.address.clone(),
            },
            job: JobDetails {
                employee_id: identity.employee_id.clone(),
                role: identity.role,
                department: identity.department.clone(),
                position: identity.position.clone(),
                joining_date: identity.joining_date,
            },
            salary: SalaryDetails {
                annual: identity.salary,
                monthly: identity.monthly_salary(),
            },
            documents: DOCUMENTS.to_vec(),
        }
    }
}

pub fn view(state: &AppState) -> AppResult<ProfileView> {
    Ok(ProfileView::from(state.identity()?))
}

pub fn edit(state: &mut AppState, update: ProfileUpdate) -> AppResult<ProfileView> {
    let identity = state.session.update_profile(update)?;
    Ok(ProfileView::from(identity))
}
