pub mod error;
pub mod profile_update;
pub mod session_state;
pub mod session_store;
pub mod signup_data;
pub mod signup_form;

pub use error::{AuthError, Result};
pub use profile_update::ProfileUpdate;
pub use session_state::SessionState;
pub use session_store::{SHARED_SECRET, SessionStore};
pub use signup_data::SignupData;
pub use signup_form::{MIN_PASSWORD_LENGTH, SignupForm};

#[cfg(test)]
mod tests;
