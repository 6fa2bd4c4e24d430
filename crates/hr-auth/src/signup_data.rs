use hr_core::UserRole;

use serde::Deserialize;

/// Fields accepted by [`crate::SessionStore::signup`].
#[derive(Clone, Deserialize)]
pub struct SignupData {
    pub employee_id: String,
    pub email: String,
    /// Accepted but not stored; login uses the shared secret
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

impl std::fmt::Debug for SignupData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupData")
            .field("employee_id", &self.employee_id)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("role", &self.role)
            .finish()
    }
}
