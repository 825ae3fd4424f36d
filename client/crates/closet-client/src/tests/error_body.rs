use crate::api::extract_error_message;

use googletest::prelude::*;

#[test]
fn given_message_field_when_extracted_then_returned() {
    let body = br#"{"message": "X"}"#;

    assert_that!(extract_error_message(body), some(eq("X")));
}

#[test]
fn given_errors_string_when_extracted_then_returned() {
    let body = br#"{"errors": "Invalid credentials."}"#;

    assert_that!(extract_error_message(body), some(eq("Invalid credentials.")));
}

#[test]
fn given_message_and_errors_when_extracted_then_message_wins() {
    let body = br#"{"errors": "second", "message": "first"}"#;

    assert_that!(extract_error_message(body), some(eq("first")));
}

#[test]
fn given_errors_list_when_extracted_then_joined() {
    let body = br#"{"errors": ["Email taken.", "Password too short."]}"#;

    assert_that!(
        extract_error_message(body),
        some(eq("Email taken. Password too short."))
    );
}

#[test]
fn given_field_errors_object_when_extracted_then_values_joined() {
    let body = br#"{"errors": {"email": ["Enter a valid email.", "Email taken."]}}"#;

    assert_that!(
        extract_error_message(body),
        some(eq("Enter a valid email. Email taken."))
    );
}

#[test]
fn given_nested_message_object_when_extracted_then_inner_message() {
    let body = br#"{"error": {"code": 17, "message": "Quota exceeded"}}"#;

    assert_that!(extract_error_message(body), some(eq("Quota exceeded")));
}

#[test]
fn given_detail_field_when_extracted_then_returned() {
    let body = br#"{"detail": "Authentication credentials were not provided."}"#;

    assert_that!(
        extract_error_message(body),
        some(eq("Authentication credentials were not provided."))
    );
}

#[test]
fn given_padded_message_when_extracted_then_returned_verbatim() {
    let body = br#"{"message": "  Item is in use.  "}"#;

    assert_that!(extract_error_message(body), some(eq("  Item is in use.  ")));
}

#[test]
fn given_empty_message_when_extracted_then_falls_through() {
    let body = br#"{"message": "", "detail": "Not found."}"#;

    assert_that!(extract_error_message(body), some(eq("Not found.")));
}

#[test]
fn given_whitespace_message_when_extracted_then_not_skipped() {
    let body = br#"{"message": "   ", "detail": "Not found."}"#;

    assert_that!(extract_error_message(body), some(eq("   ")));
}

#[test]
fn given_empty_body_when_extracted_then_none() {
    assert_that!(extract_error_message(b""), none());
}

#[test]
fn given_html_body_when_extracted_then_none() {
    assert_that!(
        extract_error_message(b"<html><body>Server Error</body></html>"),
        none()
    );
}

#[test]
fn given_json_without_known_fields_when_extracted_then_none() {
    assert_that!(extract_error_message(br#"{"status": 500}"#), none());
}
