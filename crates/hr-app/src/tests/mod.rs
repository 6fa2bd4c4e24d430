mod property_tests;
mod routes;

use crate::AppState;

use hr_auth::{SHARED_SECRET, SessionStore};

use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub(crate) const TEST_SEED: u64 = 7;

/// Seeded state with no latency and a fixed calendar seed.
pub(crate) fn test_state() -> AppState {
    AppState::new(
        SessionStore::seeded(Duration::ZERO),
        StdRng::seed_from_u64(TEST_SEED),
    )
}

pub(crate) async fn signed_in(email: &str) -> AppState {
    let mut state = test_state();
    state.login(email, SHARED_SECRET).await.unwrap();
    state
}

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub(crate) fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, minute, 0).unwrap()
}
