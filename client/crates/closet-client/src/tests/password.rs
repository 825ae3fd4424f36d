use crate::password::{MIN_ACCEPTABLE_SCORE, StrengthLevel, length, score};

use googletest::prelude::*;

#[test]
fn given_empty_password_when_scored_then_zero() {
    assert_that!(score(""), eq(0));
    assert_that!(StrengthLevel::of(""), eq(StrengthLevel::Empty));
}

#[test]
fn given_lowercase_only_long_password_when_scored_then_one() {
    assert_that!(score("abcdefgh"), eq(1));
}

#[test]
fn given_all_criteria_when_scored_then_four() {
    assert_that!(score("Abcdefg1!"), eq(4));
    assert_that!(StrengthLevel::of("Abcdefg1!"), eq(StrengthLevel::Strong));
}

#[test]
fn given_short_password_with_upper_digit_symbol_when_scored_then_three() {
    assert_that!(score("A1!"), eq(3));
}

#[test]
fn given_non_ascii_letter_when_scored_then_counts_as_symbol() {
    assert_that!(score("é"), eq(1));
}

#[test]
fn given_multibyte_password_when_scored_then_length_counts_utf16_units() {
    // seven units, fourteen bytes
    assert_that!(score("ééééééé"), eq(1));
    assert_that!(score("éééééééé"), eq(2));
}

#[test]
fn given_astral_characters_when_measured_then_count_twice() {
    // four emoji, eight UTF-16 units
    assert_that!(length("🔒🔒🔒🔒"), eq(8));
    assert_that!(score("🔒🔒🔒🔒"), eq(2));
    assert_that!(score("🔒🔒🔒"), eq(1));
}

#[test]
fn given_threshold_score_when_checked_then_acceptable() {
    assert_that!(
        StrengthLevel::from_score(MIN_ACCEPTABLE_SCORE).is_acceptable(),
        eq(true)
    );
    assert_that!(StrengthLevel::from_score(2).is_acceptable(), eq(false));
}

#[test]
fn given_levels_when_displayed_then_labels() {
    assert_that!(StrengthLevel::Weak.to_string(), eq("Weak"));
    assert_that!(StrengthLevel::Good.to_string(), eq("Good"));
    assert_that!(StrengthLevel::Empty.to_string(), eq(""));
}
