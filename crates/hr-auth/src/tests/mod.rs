mod property_tests;

use crate::{SessionStore, SignupData};

use hr_core::UserRole;

use std::time::Duration;

/// Seeded store that resolves immediately.
pub(crate) fn instant_store() -> SessionStore {
    SessionStore::seeded(Duration::ZERO)
}

pub(crate) fn signup_data(employee_id: &str, email: &str) -> SignupData {
    SignupData {
        employee_id: employee_id.to_string(),
        email: email.to_string(),
        password: "hunter2hunter2".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        role: UserRole::Employee,
    }
}
