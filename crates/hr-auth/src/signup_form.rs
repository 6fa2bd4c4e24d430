use crate::{AuthError, Result as AuthResult, SignupData};

use hr_core::UserRole;

use serde::Deserialize;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Raw registration form, checked before it reaches the store.
#[derive(Clone, Deserialize)]
pub struct SignupForm {
    pub employee_id: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub role: UserRole,
}

impl SignupForm {
    /// Check required fields and password rules, yielding store input.
    #[track_caller]
    pub fn validate(self) -> AuthResult<SignupData> {
        let required = [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("employee_id", &self.employee_id),
            ("email", &self.email),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(AuthError::signup(field, format!("{field} is required")));
            }
        }

        if self.password != self.confirm_password {
            return Err(AuthError::signup(
                "confirm_password",
                "Passwords don't match",
            ));
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::signup(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
            ));
        }

        Ok(SignupData {
            employee_id: self.employee_id.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            role: self.role,
        })
    }
}
