//! Session store - the identity directory plus the single active session.
//!
//! Owned by the application state and handed to whatever needs it; there is
//! no global instance. All mutation goes through `&mut self`, so one store can
//! never run two logins at once.

use crate::{AuthError, ProfileUpdate, Result as AuthResult, SessionState, SignupData};

use hr_core::{Identity, seed};

use std::time::Duration;

use chrono::Utc;
use log::{debug, info, warn};

/// The one password every listed identity accepts.
pub const SHARED_SECRET: &str = "password123";

pub struct SessionStore {
    identities: Vec<Identity>,
    /// Index into `identities`; entries are never removed so it stays valid
    active: Option<usize>,
    latency: Duration,
}

impl SessionStore {
    pub fn new(identities: Vec<Identity>, latency: Duration) -> Self {
        Self {
            identities,
            active: None,
            latency,
        }
    }

    /// Store preloaded with the demo login accounts.
    pub fn seeded(latency: Duration) -> Self {
        Self::new(seed::accounts(), latency)
    }

    pub fn identities(&self) -> &[Identity] {
        &self.identities
    }

    pub fn current(&self) -> Option<&Identity> {
        self.active.map(|index| &self.identities[index])
    }

    /// Active identity, or `NotAuthenticated`.
    #[track_caller]
    pub fn require_current(&self) -> AuthResult<&Identity> {
        self.current().ok_or_else(AuthError::not_authenticated)
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn is_authenticated(&self) -> bool {
        self.active.is_some()
    }

    pub fn state(&self) -> SessionState {
        match self.current() {
            Some(identity) => SessionState::Authenticated {
                identity_id: identity.id,
            },
            None => SessionState::Anonymous,
        }
    }

    /// Authenticate against the directory.
    ///
    /// Succeeds only when an identity has exactly this email and `secret`
    /// equals [`SHARED_SECRET`]. A failure leaves the session untouched.
    pub async fn login(&mut self, email: &str, secret: &str) -> AuthResult<&Identity> {
        self.simulate_latency().await;

        let found = self.identities.iter().position(|i| i.email == email);

        match found {
            Some(index) if secret == SHARED_SECRET => {
                self.active = Some(index);
                let identity = &self.identities[index];
                info!("Login succeeded for {} ({})", identity.email, identity.role);
                Ok(identity)
            }
            _ => {
                warn!("Login failed for {email}");
                Err(AuthError::invalid_credentials())
            }
        }
    }

    /// End the session. Safe to call when already anonymous.
    pub fn logout(&mut self) {
        if let Some(identity) = self.current() {
            info!("Logged out {}", identity.email);
        }
        self.active = None;
    }

    /// Register a new identity and make it the active one.
    ///
    /// Never fails. Duplicate emails and employee ids are accepted; login
    /// afterwards resolves to the earliest identity with that email.
    pub async fn signup(&mut self, data: SignupData) -> &Identity {
        self.simulate_latency().await;

        let identity = Identity::registered(
            data.employee_id,
            data.email,
            data.first_name,
            data.last_name,
            data.role,
            Utc::now().date_naive(),
        );

        info!(
            "Signed up {} as {} ({} identities)",
            identity.email,
            identity.role,
            self.identities.len() + 1
        );

        self.identities.push(identity);
        let index = self.identities.len() - 1;
        self.active = Some(index);
        &self.identities[index]
    }

    /// Edit contact details of the active identity.
    #[track_caller]
    pub fn update_profile(&mut self, update: ProfileUpdate) -> AuthResult<&Identity> {
        let index = self.active.ok_or_else(AuthError::not_authenticated)?;
        let identity = &mut self.identities[index];

        ProfileUpdate::apply(update.phone, &mut identity.phone);
        ProfileUpdate::apply(update.address, &mut identity.address);

        debug!("Updated profile of {}", identity.email);
        Ok(&*identity)
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}
