use crate::tests::{EnvGuard, setup_config_dir, write_config};
use crate::{Config, DEFAULT_SIMULATED_LATENCY_MS};

use googletest::assert_that;
use googletest::prelude::{anything, eq, none, ok, some};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(
        config.auth.simulated_latency_ms,
        eq(DEFAULT_SIMULATED_LATENCY_MS)
    );
    assert_that!(config.logging.level.filter(), eq(LevelFilter::Info));
    assert_that!(config.logging.file, none());
    assert_that!(config.attendance.rng_seed, none());
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_is_created() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let nested = temp.path().join("nested").join("hr");

    // When
    let result = Config::load_from(&nested);

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(
        &temp,
        r#"
            [auth]
            simulated_latency_ms = 250

            [logging]
            level = "debug"
            colored = false

            [attendance]
            rng_seed = 42
        "#,
    );

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.auth.simulated_latency_ms, eq(250));
    assert_that!(config.logging.level.filter(), eq(LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.attendance.rng_seed, some(eq(42)));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[auth]\nsimulated_latency_ms = 250");
    let _latency = EnvGuard::set("HR_AUTH_SIMULATED_LATENCY_MS", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.auth.simulated_latency_ms, eq(0));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _level = EnvGuard::set("HR_LOG_LEVEL", "trace");
    let _colored = EnvGuard::set("HR_LOG_COLORED", "false");
    let _file = EnvGuard::set("HR_LOG_FILE", "hr.log");
    let _seed = EnvGuard::set("HR_ATTENDANCE_RNG_SEED", "7");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.level.filter(), eq(LevelFilter::Trace));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file.as_deref(), some(eq("hr.log")));
    assert_that!(config.attendance.rng_seed, some(eq(7)));
}

#[test]
#[serial]
fn given_log_file_when_log_file_path_then_joins_config_and_log_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("HR_LOG_FILE", "hr.log");

    // When
    let config = Config::load().unwrap();
    let path = config.log_file_path(temp.path());

    // Then
    assert_that!(path, some(eq(&temp.path().join("log").join("hr.log"))));
}
