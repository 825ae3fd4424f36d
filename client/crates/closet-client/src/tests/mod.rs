mod bootstrap_primitives;
mod error_body;
mod file_session_store;
mod navigation;
mod password;
mod request_body;
mod signup_form;

use crate::api::models::{User, UserProfile};

pub(crate) fn sample_user() -> User {
    User {
        id: Some(7),
        email: String::from("ada@example.com"),
        profile: Some(UserProfile {
            full_name: Some(String::from("Ada Lovelace")),
            age: Some(36),
            gender: Some(String::from("female")),
            location: Some(String::from("London")),
            profile_picture: Some(String::from("/media/profile_pictures/ada.png")),
        }),
    }
}
