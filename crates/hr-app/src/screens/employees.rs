//! Employee directory: search box plus department filter.

use crate::{AppResult, AppState};

use hr_core::{Identity, IdentityId, UserRole};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Department filter value matching every department.
pub const ALL_DEPARTMENTS: &str = "all";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeFilter {
    pub query: String,
    /// `None` or `"all"` for every department
    pub department: Option<String>,
}

impl EmployeeFilter {
    fn matches(&self, identity: &Identity) -> bool {
        self.matches_query(identity) && self.matches_department(identity)
    }

    fn matches_query(&self, identity: &Identity) -> bool {
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [
            &identity.first_name,
            &identity.last_name,
            &identity.email,
            &identity.employee_id,
        ]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&query))
    }

    fn matches_department(&self, identity: &Identity) -> bool {
        match self.department.as_deref().map(str::trim) {
            None => true,
            Some(department) if department.eq_ignore_ascii_case(ALL_DEPARTMENTS) => true,
            Some(department) => identity.department == department,
        }
    }
}

/// Identities matching `filter`, in directory order.
pub fn search<'a>(
    identities: impl IntoIterator<Item = &'a Identity>,
    filter: &EmployeeFilter,
) -> Vec<&'a Identity> {
    identities
        .into_iter()
        .filter(|i| filter.matches(i))
        .collect()
}

/// Distinct department names in first-seen order.
pub fn departments<'a>(identities: impl IntoIterator<Item = &'a Identity>) -> Vec<&'a str> {
    let mut names: Vec<&str> = Vec::new();
    for identity in identities {
        if !names.contains(&identity.department.as_str()) {
            names.push(&identity.department);
        }
    }
    names
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployeeCard {
    pub id: IdentityId,
    pub employee_id: String,
    pub name: String,
    pub initials: String,
    pub email: String,
    pub role: UserRole,
    pub department: String,
    pub position: String,
    pub phone: Option<String>,
    pub joining_date: NaiveDate,
}

impl From<&Identity> for EmployeeCard {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id,
            employee_id: identity.employee_id.clone(),
            name: identity.full_name(),
            initials: identity.initials(),
            email: identity.email.clone(),
            role: identity.role,
            department: identity.department.clone(),
            position: identity.position.clone(),
            phone: identity.phone.clone(),
            joining_date: identity.joining_date,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployeeDirectoryView {
    pub departments: Vec<String>,
    pub total: usize,
    pub employees: Vec<EmployeeCard>,
}

pub fn directory(state: &AppState, filter: &EmployeeFilter) -> AppResult<EmployeeDirectoryView> {
    state.identity()?;
    let employees: Vec<EmployeeCard> = search(state.directory(), filter)
        .into_iter()
        .map(EmployeeCard::from)
        .collect();

    Ok(EmployeeDirectoryView {
        departments: departments(state.directory())
            .into_iter()
            .map(str::to_string)
            .collect(),
        total: employees.len(),
        employees,
    })
}
