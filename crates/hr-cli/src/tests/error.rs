use crate::CliError;

use hr_app::AppError;
use hr_auth::AuthError;

use googletest::assert_that;
use googletest::prelude::{eq, none};

#[test]
fn given_auth_failure_when_rendered_then_code_and_user_message() {
    let error = CliError::from(AuthError::invalid_credentials());

    let json = error.to_json();

    assert_that!(json["error"]["code"].as_str(), eq(Some("INVALID_CREDENTIALS")));
    assert_that!(
        json["error"]["message"].as_str(),
        eq(Some("Invalid email or password"))
    );
    assert_that!(json["error"].get("field"), none());
}

#[test]
fn given_signup_failure_when_rendered_then_field_included() {
    let error = CliError::from(AuthError::signup("password", "too short"));

    let json = error.to_json();

    assert_that!(json["error"]["code"].as_str(), eq(Some("INVALID_SIGNUP")));
    assert_that!(json["error"]["field"].as_str(), eq(Some("password")));
}

#[test]
fn given_app_error_when_wrapped_then_code_passes_through() {
    let error = CliError::from(AppError::attendance("Not checked in"));

    assert_that!(error.error_code(), eq("ATTENDANCE_ERROR"));
    assert_that!(
        error.to_json()["error"]["message"].as_str(),
        eq(Some("Not checked in"))
    );
}

#[test]
fn given_usage_error_when_rendered_then_usage_code() {
    let error = CliError::usage("unterminated quote");

    assert_that!(error.to_json()["error"]["code"].as_str(), eq(Some("USAGE")));
}
