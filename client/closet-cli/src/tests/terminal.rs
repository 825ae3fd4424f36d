use crate::terminal::TerminalNavigator;

use closet_client::{Navigator, Route};

use googletest::prelude::*;

#[test]
fn given_fresh_navigator_when_queried_then_no_route() {
    let navigator = TerminalNavigator::new();

    assert_that!(navigator.last_route(), none());
    assert_that!(navigator.route_count(), eq(0));
}

#[test]
fn given_navigations_when_queried_then_last_route_reported() {
    let navigator = TerminalNavigator::new();

    navigator.navigate(Route::Login);
    navigator.navigate(Route::Dashboard);

    assert_that!(navigator.last_route(), some(eq(&Route::Dashboard)));
    assert_that!(navigator.route_count(), eq(2));
}
