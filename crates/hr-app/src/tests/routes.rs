use crate::tests::signed_in;
use crate::{AppError, Guard, Route, guard, navigation};

use hr_auth::SessionStore;
use hr_core::{UserRole, seed};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{contains, eq, not};

#[test]
fn given_every_route_when_path_parsed_back_then_same_route() {
    for route in Route::ALL {
        let parsed: Route = route.path().parse().unwrap();
        assert_that!(parsed, eq(route));
    }
}

#[test]
fn given_trailing_slash_when_parsed_then_route_resolves() {
    let route: Route = "/leave-approvals/".parse().unwrap();
    assert_that!(route, eq(Route::LeaveApprovals));
}

#[test]
fn given_empty_path_when_parsed_then_landing() {
    let route: Route = "".parse().unwrap();
    assert_that!(route, eq(Route::Landing));
}

#[test]
fn given_unknown_path_when_parsed_then_unknown_route_error() {
    let result = "/settings".parse::<Route>();

    assert!(matches!(result, Err(AppError::UnknownRoute { .. })));
    assert_that!(result.unwrap_err().error_code(), eq("UNKNOWN_ROUTE"));
}

#[test]
fn given_anonymous_session_when_guarding_protected_route_then_redirect_to_auth() {
    let store = SessionStore::seeded(Duration::ZERO);

    for route in Route::ALL.into_iter().filter(|r| !r.is_public()) {
        assert_that!(guard(&store, route), eq(Guard::Redirect(Route::Auth)));
    }
}

#[test]
fn given_anonymous_session_when_guarding_public_route_then_allowed() {
    let store = SessionStore::seeded(Duration::ZERO);

    assert_that!(guard(&store, Route::Landing), eq(Guard::Allow(Route::Landing)));
    assert_that!(guard(&store, Route::Auth), eq(Guard::Allow(Route::Auth)));
}

#[tokio::test]
async fn given_employee_session_when_guarding_admin_screen_then_still_allowed() {
    let state = signed_in(seed::EMPLOYEE_EMAIL).await;

    let outcome = guard(&state.session, Route::LeaveApprovals);

    assert_that!(outcome, eq(Guard::Allow(Route::LeaveApprovals)));
}

#[test]
fn given_admin_role_when_navigation_then_management_screens() {
    let routes: Vec<Route> = navigation(UserRole::Admin)
        .into_iter()
        .map(|item| item.route)
        .collect();

    assert_that!(
        routes,
        eq(&vec![
            Route::Dashboard,
            Route::Employees,
            Route::Attendance,
            Route::LeaveApprovals,
            Route::Payroll,
            Route::Reports,
        ])
    );
}

#[test]
fn given_employee_role_when_navigation_then_personal_screens() {
    let routes: Vec<Route> = navigation(UserRole::Employee)
        .into_iter()
        .map(|item| item.route)
        .collect();

    assert_that!(routes, contains(eq(&Route::Profile)));
    assert_that!(routes, contains(eq(&Route::Leave)));
    assert_that!(routes, not(contains(eq(&Route::LeaveApprovals))));
    assert_that!(routes.len(), eq(5));
}
