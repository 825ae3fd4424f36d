use crate::navigation::{Navigator, OtpPurpose, RecordingNavigator, Route};

use googletest::prelude::*;

#[test]
fn given_routes_when_path_then_screen_paths() {
    assert_that!(Route::Login.path(), eq("/login"));
    assert_that!(Route::Dashboard.path(), eq("/dashboard"));
    assert_that!(Route::ForgotPassword.path(), eq("/forgot-password"));
}

#[test]
fn given_verify_otp_route_when_displayed_then_query_params() {
    let route = Route::VerifyOtp {
        user_id: String::from("42"),
        purpose: OtpPurpose::PasswordReset,
    };

    assert_that!(
        route.to_string(),
        eq("/verify-otp?user_id=42&purpose=password_reset")
    );
}

#[test]
fn given_reset_password_route_when_displayed_then_user_id_param() {
    let route = Route::ResetPassword {
        user_id: String::from("9"),
    };

    assert_that!(route.to_string(), eq("/reset-password?user_id=9"));
}

#[test]
fn given_routes_when_is_public_then_only_auth_screens() {
    assert_that!(Route::Login.is_public(), eq(true));
    assert_that!(Route::Signup.is_public(), eq(true));
    assert_that!(Route::Dashboard.is_public(), eq(false));
    assert_that!(Route::Closet.is_public(), eq(false));
}

#[test]
fn given_purpose_strings_when_parsed_then_variants() {
    assert_that!("signup".parse::<OtpPurpose>(), ok(eq(&OtpPurpose::Signup)));
    assert_that!(
        "password_reset".parse::<OtpPurpose>(),
        ok(eq(&OtpPurpose::PasswordReset))
    );
    assert_that!("reset".parse::<OtpPurpose>(), err(anything()));
}

#[test]
fn given_purpose_when_serialized_then_snake_case() {
    let json = serde_json::to_string(&OtpPurpose::PasswordReset).unwrap();

    assert_that!(json, eq("\"password_reset\""));
}

#[test]
fn given_recording_navigator_when_navigating_then_history_kept() {
    let navigator = RecordingNavigator::new();

    navigator.navigate(Route::Login);
    navigator.navigate(Route::Dashboard);

    assert_that!(navigator.count(), eq(2));
    assert_that!(navigator.last(), some(eq(&Route::Dashboard)));
    assert_that!(
        navigator.routes(),
        elements_are![eq(&Route::Login), eq(&Route::Dashboard)]
    );
}
