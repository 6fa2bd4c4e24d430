use crate::Config;
use crate::tests::{setup_config_dir, write_config};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Edge Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "this is not valid toml {{{{");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_invalid_log_level_in_toml_when_load_then_falls_back_to_info() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[logging]\nlevel = \"chatty\"");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(result.unwrap().logging.level.filter(), eq(LevelFilter::Info));
}

#[test]
#[serial]
fn given_partial_toml_when_load_then_missing_sections_use_defaults() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[attendance]\nrng_seed = 3");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.auth.simulated_latency_ms,
        eq(crate::DEFAULT_SIMULATED_LATENCY_MS)
    );
    assert_that!(config.logging.dir.as_str(), eq("log"));
}
