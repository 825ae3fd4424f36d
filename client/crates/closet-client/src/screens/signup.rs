use crate::api::models::{SignupProfile, SignupRequest};
use crate::navigation::{OtpPurpose, Route};
use crate::password;
use crate::request::RequestHelper;
use crate::screens::messages;
use crate::{ClientError, ClientResult};

use log::{info, warn};

const MIN_PASSWORD_LENGTH: usize = 8;

/// Raw signup input as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub age: String,
    pub gender: String,
    pub location: String,
    pub terms_accepted: bool,
}

impl SignupForm {
    /// Check the form and build the request the backend expects.
    pub fn validate(&self) -> ClientResult<SignupRequest> {
        let required = [
            &self.full_name,
            &self.email,
            &self.password,
            &self.confirm_password,
            &self.age,
            &self.gender,
            &self.location,
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(ClientError::validation(messages::FILL_ALL_FIELDS));
        }

        if self.password != self.confirm_password {
            return Err(ClientError::validation(messages::PASSWORDS_DO_NOT_MATCH));
        }

        if password::length(&self.password) < MIN_PASSWORD_LENGTH {
            return Err(ClientError::validation(messages::PASSWORD_TOO_SHORT));
        }

        let age = match self.age.trim().parse::<u32>() {
            Ok(age) if age > 0 => age,
            _ => return Err(ClientError::validation(messages::AGE_NOT_POSITIVE)),
        };

        if !self.terms_accepted {
            return Err(ClientError::validation(messages::TERMS_NOT_ACCEPTED));
        }

        Ok(SignupRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            profile: SignupProfile {
                full_name: self.full_name.trim().to_string(),
                age,
                gender: self.gender.trim().to_string(),
                location: self.location.trim().to_string(),
            },
        })
    }
}

pub struct SignupScreen {
    helper: RequestHelper,
    pub form: SignupForm,
    pub error: Option<String>,
    pub is_loading: bool,
}

impl SignupScreen {
    pub fn new(helper: RequestHelper) -> Self {
        Self {
            helper,
            form: SignupForm::default(),
            error: None,
            is_loading: false,
        }
    }

    /// Register the account; on success the user continues to OTP verification.
    pub async fn submit(&mut self) -> bool {
        self.error = None;

        let request = match self.form.validate() {
            Ok(request) => request,
            Err(e) => {
                self.error = Some(e.user_message());
                return false;
            }
        };

        self.is_loading = true;
        let result = self.helper.api().signup(&request).await;
        self.is_loading = false;

        match result {
            Ok(response) => {
                info!("Signup accepted, awaiting OTP for user {}", response.user_id);
                self.helper.navigate(Route::VerifyOtp {
                    user_id: response.user_id,
                    purpose: OtpPurpose::Signup,
                });
                true
            }
            Err(e) => {
                warn!("Signup failed: {e}");
                self.error = Some(e.user_message_or(messages::SIGNUP_FAILED));
                false
            }
        }
    }
}
