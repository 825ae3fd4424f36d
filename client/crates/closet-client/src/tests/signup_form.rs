use crate::screens::SignupForm;
use crate::screens::messages;

use googletest::prelude::*;

fn valid_form() -> SignupForm {
    SignupForm {
        full_name: String::from("Ada Lovelace"),
        email: String::from(" ada@example.com "),
        password: String::from("Secret123!"),
        confirm_password: String::from("Secret123!"),
        age: String::from("36"),
        gender: String::from("female"),
        location: String::from("London"),
        terms_accepted: true,
    }
}

fn rejection(form: &SignupForm) -> String {
    form.validate().unwrap_err().user_message()
}

#[test]
fn given_valid_form_when_validated_then_request_built() {
    let request = valid_form().validate().unwrap();

    assert_that!(request.email, eq("ada@example.com"));
    assert_that!(request.profile.age, eq(36));
}

#[test]
fn given_missing_field_when_validated_then_fill_all_fields() {
    let form = SignupForm {
        location: String::new(),
        ..valid_form()
    };

    assert_that!(rejection(&form), eq(messages::FILL_ALL_FIELDS));
}

#[test]
fn given_mismatched_passwords_when_validated_then_rejected() {
    let form = SignupForm {
        confirm_password: String::from("Secret123?"),
        ..valid_form()
    };

    assert_that!(rejection(&form), eq(messages::PASSWORDS_DO_NOT_MATCH));
}

#[test]
fn given_short_password_when_validated_then_rejected() {
    let form = SignupForm {
        password: String::from("Ab1!"),
        confirm_password: String::from("Ab1!"),
        ..valid_form()
    };

    assert_that!(rejection(&form), eq(messages::PASSWORD_TOO_SHORT));
}

#[test]
fn given_password_of_four_emoji_when_validated_then_long_enough() {
    let form = SignupForm {
        password: String::from("🔒🔒🔒🔒"),
        confirm_password: String::from("🔒🔒🔒🔒"),
        ..valid_form()
    };

    assert_that!(form.validate().is_ok(), eq(true));
}

#[test]
fn given_zero_or_text_age_when_validated_then_rejected() {
    for age in ["0", "-3", "thirty"] {
        let form = SignupForm {
            age: String::from(age),
            ..valid_form()
        };
        assert_that!(rejection(&form), eq(messages::AGE_NOT_POSITIVE));
    }
}

#[test]
fn given_terms_not_accepted_when_validated_then_rejected() {
    let form = SignupForm {
        terms_accepted: false,
        ..valid_form()
    };

    assert_that!(rejection(&form), eq(messages::TERMS_NOT_ACCEPTED));
}
