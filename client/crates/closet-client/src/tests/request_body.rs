use crate::api::models::ImageUpload;
use crate::request::{AccessKind, RequestBody};

use googletest::prelude::*;
use reqwest::Method;
use serde_json::json;

#[test]
fn given_fields_without_image_when_form_then_json_object() {
    let body = RequestBody::form(
        vec![("name", String::from("Blue Shirt")), ("color", String::from("blue"))],
        "image",
        None,
    );

    let expected = json!({"name": "Blue Shirt", "color": "blue"});
    match body {
        RequestBody::Json(value) => {
            assert_that!(value, eq(&expected));
        }
        other => panic!("expected JSON body, got {other:?}"),
    }
}

#[test]
fn given_fields_with_image_when_form_then_multipart() {
    let image = ImageUpload::from_file_name("shirt.png", vec![1, 2, 3]);

    let body = RequestBody::form(vec![("name", String::from("Blue Shirt"))], "image", Some(image));

    match body {
        RequestBody::Multipart { fields, file } => {
            assert_that!(fields.len(), eq(1));
            let (field, upload) = file.expect("file part");
            assert_that!(field, eq("image"));
            assert_that!(upload.mime_type, eq("image/png"));
        }
        other => panic!("expected multipart body, got {other:?}"),
    }
}

#[test]
fn given_file_names_when_mime_guessed_then_by_extension() {
    assert_that!(
        ImageUpload::from_file_name("a.JPG", vec![]).mime_type,
        eq("image/jpeg")
    );
    assert_that!(
        ImageUpload::from_file_name("a.webp", vec![]).mime_type,
        eq("image/webp")
    );
    assert_that!(
        ImageUpload::from_file_name("noext", vec![]).mime_type,
        eq("application/octet-stream")
    );
}

#[test]
fn given_methods_when_classified_then_safe_methods_are_reads() {
    assert_that!(AccessKind::from(&Method::GET), eq(AccessKind::Read));
    assert_that!(AccessKind::from(&Method::POST), eq(AccessKind::Write));
    assert_that!(AccessKind::from(&Method::PATCH), eq(AccessKind::Write));
    assert_that!(AccessKind::from(&Method::DELETE), eq(AccessKind::Write));
}
