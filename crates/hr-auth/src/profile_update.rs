use serde::Deserialize;

/// Contact details an identity may edit on its own profile.
///
/// `None` leaves a field untouched; a blank string clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl ProfileUpdate {
    pub(crate) fn apply(value: Option<String>, target: &mut Option<String>) {
        if let Some(value) = value {
            let trimmed = value.trim();
            *target = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            };
        }
    }
}
