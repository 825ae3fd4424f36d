use crate::bootstrap::{AnimationSignal, BootstrapState, StartupTimings, ViewLifecycle};
use crate::navigation::Route;

use std::time::Duration;

use closet_config::StartupConfig;
use googletest::prelude::*;

#[test]
fn given_default_timings_when_built_then_match_startup_config() {
    let timings = StartupTimings::default();

    assert_that!(timings.min_duration, eq(Duration::from_millis(3000)));
    assert_that!(timings.animation_grace, eq(Duration::from_millis(500)));
}

#[test]
fn given_custom_startup_config_when_converted_then_durations() {
    let config = StartupConfig {
        min_duration_ms: 1200,
        animation_grace_ms: 0,
    };

    let timings = StartupTimings::from(&config);

    assert_that!(timings.min_duration, eq(Duration::from_millis(1200)));
    assert_that!(timings.animation_grace, eq(Duration::ZERO));
}

#[test]
fn given_states_when_checked_then_only_navigated_and_cancelled_terminal() {
    assert_that!(BootstrapState::Started.is_terminal(), eq(false));
    assert_that!(BootstrapState::Animating.is_terminal(), eq(false));
    assert_that!(BootstrapState::Navigated(Route::Login).is_terminal(), eq(true));
    assert_that!(BootstrapState::Cancelled.is_terminal(), eq(true));
}

#[tokio::test]
async fn given_completer_when_completed_then_signal_finishes() {
    let (completer, mut signal) = AnimationSignal::channel();
    assert_that!(signal.is_finished(), eq(false));

    completer.complete();
    signal.wait().await;

    assert_that!(signal.is_finished(), eq(true));
}

#[tokio::test]
async fn given_completer_dropped_when_waiting_then_returns() {
    let (completer, mut signal) = AnimationSignal::channel();

    drop(completer);

    tokio::time::timeout(Duration::from_secs(1), signal.wait())
        .await
        .expect("dropped completer should release waiters");
}

#[tokio::test]
async fn given_lifecycle_when_unmounted_then_waiters_released() {
    let lifecycle = ViewLifecycle::new();
    let observer = lifecycle.clone();
    let waiter = tokio::spawn(async move { observer.unmounted().await });

    lifecycle.unmount();

    tokio::time::timeout(Duration::from_secs(1), waiter)
        .await
        .expect("unmount should release waiters")
        .unwrap();
    assert_that!(lifecycle.is_unmounted(), eq(true));
}
