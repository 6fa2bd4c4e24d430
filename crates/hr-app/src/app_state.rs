//! Application state - everything the screens read and mutate.
//!
//! One value per running client, owned by the shell and passed by reference
//! into each screen. Nothing here is global and nothing outlives the process.

use crate::{
    AppResult, AttendanceCalendar, CalendarMonth, CheckInState, Guard, LeaveBook, Route, guard,
};

use hr_auth::{SessionStore, SignupForm};
use hr_config::Config;
use hr_core::{Identity, PayrollRecord, SalaryBreakdown, seed};

use std::collections::HashMap;

use chrono::NaiveDate;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub struct AppState {
    pub session: SessionStore,
    /// Directory records that cannot sign in
    pub staff: Vec<Identity>,
    pub leave_book: LeaveBook,
    pub payroll_history: Vec<PayrollRecord>,
    pub salary_breakdown: SalaryBreakdown,
    pub check_in: CheckInState,
    /// Months already shown this session, so revisits stay stable
    calendars: HashMap<CalendarMonth, AttendanceCalendar>,
    rng: StdRng,
}

impl AppState {
    pub fn new(session: SessionStore, rng: StdRng) -> Self {
        Self {
            session,
            staff: seed::staff(),
            leave_book: LeaveBook::seeded(),
            payroll_history: seed::payroll_history(),
            salary_breakdown: seed::salary_breakdown(),
            check_in: CheckInState::default(),
            calendars: HashMap::new(),
            rng,
        }
    }

    /// Seeded state using the configured latency and calendar seed.
    pub fn from_config(config: &Config) -> Self {
        let rng = match config.attendance.rng_seed {
            Some(seed) => {
                debug!("Attendance calendars use fixed seed {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };

        Self::new(
            SessionStore::seeded(config.auth.simulated_latency()),
            rng,
        )
    }

    /// Active identity, or `NotAuthenticated`.
    #[track_caller]
    pub fn identity(&self) -> AppResult<&Identity> {
        Ok(self.session.require_current()?)
    }

    pub async fn login(&mut self, email: &str, secret: &str) -> AppResult<&Identity> {
        let previous = self.session.current().map(|i| i.id);
        let identity = self.session.login(email, secret).await?;

        if previous != Some(identity.id) {
            self.check_in = CheckInState::default();
            self.calendars.clear();
        }
        Ok(identity)
    }

    /// Everyone in the employee directory: the store's identities, then staff.
    pub fn directory(&self) -> impl Iterator<Item = &Identity> {
        self.session.identities().iter().chain(&self.staff)
    }

    /// Validate the form, then register and activate the new identity.
    pub async fn signup(&mut self, form: SignupForm) -> AppResult<&Identity> {
        let data = form.validate()?;
        self.reset_session_screens();
        Ok(self.session.signup(data).await)
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.reset_session_screens();
    }

    /// Resolve a path through the authentication guard.
    #[track_caller]
    pub fn open(&self, path: &str) -> AppResult<Guard> {
        let route: Route = path.parse()?;
        let outcome = guard(&self.session, route);
        info!("open {path} -> {outcome:?}");
        Ok(outcome)
    }

    /// Attendance for `month`, generated on first view.
    pub fn calendar(&mut self, month: CalendarMonth, today: NaiveDate) -> &AttendanceCalendar {
        let rng = &mut self.rng;
        self.calendars
            .entry(month)
            .or_insert_with(|| AttendanceCalendar::generate(month, today, rng))
    }

    fn reset_session_screens(&mut self) {
        self.check_in = CheckInState::default();
        self.calendars.clear();
    }
}
