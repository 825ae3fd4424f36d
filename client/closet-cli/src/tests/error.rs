use crate::error::CliError;

use closet_client::GENERIC_FAILURE_MESSAGE;

use googletest::prelude::*;

#[test]
fn given_screen_message_when_displayed_then_verbatim() {
    let error = CliError::screen(Some("Please enter a name."));

    assert_that!(error.to_string(), eq("Please enter a name."));
}

#[test]
fn given_no_screen_message_when_displayed_then_generic() {
    let error = CliError::screen(None);

    assert_that!(error.to_string(), eq(GENERIC_FAILURE_MESSAGE));
}

#[test]
fn given_client_error_when_wrapped_then_transparent() {
    let error = CliError::from(closet_client::ClientError::validation("bad input"));

    assert_that!(error.to_string(), contains_substring("bad input"));
}
