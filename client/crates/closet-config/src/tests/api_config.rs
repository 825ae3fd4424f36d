use crate::ApiConfig;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};

#[test]
fn given_default_api_config_when_validate_then_ok() {
    assert_that!(ApiConfig::default().validate(), ok(anything()));
}

#[test]
fn given_base_url_without_scheme_when_validate_then_error() {
    // Given
    let config = ApiConfig {
        base_url: String::from("192.168.88.66:8000"),
        ..ApiConfig::default()
    };

    // When
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("api.base_url")
    );
}

#[test]
fn given_zero_timeout_when_validate_then_error() {
    let config = ApiConfig {
        timeout_secs: 0,
        ..ApiConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_blank_auth_scheme_when_validate_then_error() {
    let config = ApiConfig {
        auth_scheme: String::from("  "),
        ..ApiConfig::default()
    };

    assert_that!(
        config.validate().unwrap_err().to_string(),
        contains_substring("auth_scheme")
    );
}

#[test]
fn given_blank_csrf_header_when_validate_then_error() {
    let config = ApiConfig {
        csrf_header: String::new(),
        ..ApiConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}
