use crate::SHARED_SECRET;
use crate::tests::{instant_store, signup_data};

use hr_core::seed;

use proptest::prelude::*;
use tokio::runtime::{Builder, Runtime};

fn runtime() -> Runtime {
    Builder::new_current_thread().enable_time().build().unwrap()
}

// =========================================================================
// Property-Based Tests - Login
// =========================================================================

proptest! {
    #[test]
    fn given_unlisted_email_when_login_with_any_secret_then_fails(
        email in "[a-z]{1,12}@[a-z]{1,8}\\.(net|org|io)",
        secret in prop_oneof![Just(SHARED_SECRET.to_string()), ".{0,24}"],
    ) {
        let mut store = instant_store();

        let result = runtime().block_on(store.login(&email, &secret));

        prop_assert!(result.is_err());
        prop_assert!(!store.is_authenticated());
    }

    #[test]
    fn given_staff_email_when_login_with_any_secret_then_fails(
        index in 0usize..seed::staff().len(),
        secret in prop_oneof![Just(SHARED_SECRET.to_string()), ".{0,24}"],
    ) {
        let mut store = instant_store();
        let staff = seed::staff()[index].clone();

        let result = runtime().block_on(store.login(&staff.email, &secret));

        prop_assert!(result.is_err());
        prop_assert!(!store.is_authenticated());
    }

    #[test]
    fn given_listed_email_when_login_then_succeeds_iff_secret_matches(
        index in 0usize..seed::accounts().len(),
        secret in prop_oneof![Just(SHARED_SECRET.to_string()), ".{0,24}"],
    ) {
        let mut store = instant_store();
        let identity = seed::accounts()[index].clone();

        let succeeded = runtime()
            .block_on(store.login(&identity.email, &secret))
            .is_ok();

        prop_assert_eq!(succeeded, secret == SHARED_SECRET);
        prop_assert_eq!(store.is_authenticated(), succeeded);
        if succeeded {
            prop_assert_eq!(store.current().map(|i| i.id), Some(identity.id));
        }
    }

    #[test]
    fn given_any_signups_when_logout_then_anonymous_and_all_records_kept(
        count in 1usize..6,
    ) {
        let mut store = instant_store();
        let before = store.identities().len();
        let rt = runtime();

        for n in 0..count {
            rt.block_on(store.signup(signup_data(&format!("E{n}"), "dup@x.com")));
        }
        store.logout();

        prop_assert_eq!(store.identities().len(), before + count);
        prop_assert!(!store.is_authenticated());
    }
}
