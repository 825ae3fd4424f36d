use crate::StartupConfig;

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};

#[test]
fn given_default_startup_config_when_validate_then_ok() {
    assert_that!(StartupConfig::default().validate(), ok(anything()));
}

#[test]
fn given_zero_min_duration_when_validate_then_ok() {
    let config = StartupConfig {
        min_duration_ms: 0,
        animation_grace_ms: 0,
    };

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_min_duration_above_limit_when_validate_then_error() {
    let config = StartupConfig {
        min_duration_ms: crate::MAX_MIN_DURATION_MS + 1,
        ..StartupConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_grace_above_limit_when_validate_then_error() {
    let config = StartupConfig {
        animation_grace_ms: crate::MAX_ANIMATION_GRACE_MS + 1,
        ..StartupConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_millisecond_fields_when_converted_then_durations_match() {
    let config = StartupConfig {
        min_duration_ms: 1500,
        animation_grace_ms: 250,
    };

    assert_that!(config.min_duration(), eq(Duration::from_millis(1500)));
    assert_that!(config.animation_grace(), eq(Duration::from_millis(250)));
}
