use crate::api::models::User;
use crate::api::models::id::{optional_string_or_number, string_or_number};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub profile: SignupProfile,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupProfile {
    pub full_name: String,
    pub age: u32,
    pub gender: String,
    pub location: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignupResponse {
    #[serde(deserialize_with = "string_or_number")]
    pub user_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PasswordResetResponse {
    /// Absent when the server does not reveal whether the account exists
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of OTP verification and password-reset confirmation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TokenResponse {
    pub token: Option<String>,
    pub user: Option<User>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CsrfTokenResponse {
    #[serde(alias = "csrf_token", alias = "csrftoken", rename = "csrfToken")]
    pub csrf_token: String,
}
