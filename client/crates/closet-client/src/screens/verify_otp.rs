use crate::navigation::{OtpPurpose, Route};
use crate::request::RequestHelper;
use crate::screens::messages;

use log::{info, warn};

pub struct VerifyOtpScreen {
    helper: RequestHelper,
    user_id: Option<String>,
    purpose: Option<OtpPurpose>,
    pub code: String,
    pub error: Option<String>,
    pub message: Option<String>,
    pub is_loading: bool,
}

impl VerifyOtpScreen {
    /// Parameters come from the route that opened the screen and may be missing.
    pub fn new(helper: RequestHelper, user_id: Option<String>, purpose: Option<OtpPurpose>) -> Self {
        Self {
            helper,
            user_id: user_id.filter(|id| !id.trim().is_empty()),
            purpose,
            code: String::new(),
            error: None,
            message: None,
            is_loading: false,
        }
    }

    /// Without a user id and purpose there is nothing to verify; back to login.
    pub fn mount(&mut self) -> bool {
        if self.user_id.is_none() || self.purpose.is_none() {
            self.error = Some(messages::INVALID_REQUEST.to_string());
            self.helper.navigate(Route::Login);
            return false;
        }
        true
    }

    pub async fn submit(&mut self) -> bool {
        self.error = None;
        self.message = None;

        let (Some(user_id), Some(purpose)) = (self.user_id.clone(), self.purpose) else {
            self.error = Some(messages::INVALID_REQUEST.to_string());
            return false;
        };

        let code = self.code.trim().to_string();
        if code.is_empty() {
            self.error = Some(messages::ENTER_OTP.to_string());
            return false;
        }

        self.is_loading = true;
        let result = self.helper.api().verify_otp(&user_id, &code, purpose).await;
        self.is_loading = false;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                warn!("OTP verification failed: {e}");
                self.error = Some(e.user_message_or(messages::OTP_FAILED));
                return false;
            }
        };

        match purpose {
            OtpPurpose::Signup => {
                let Some(token) = response.token else {
                    warn!("OTP verified for signup but no token was returned");
                    self.error = Some(messages::OTP_FAILED.to_string());
                    return false;
                };

                if let Err(e) = self
                    .helper
                    .session()
                    .establish(&token, response.user.as_ref())
                    .await
                {
                    warn!("Could not persist session after verification: {e}");
                    self.error = Some(messages::OTP_FAILED.to_string());
                    return false;
                }

                info!("Email verified for user {user_id}");
                self.message = Some(messages::EMAIL_VERIFIED.to_string());
                self.helper.navigate(Route::Dashboard);
            }
            OtpPurpose::PasswordReset => {
                self.message = Some(messages::OTP_VERIFIED_FOR_RESET.to_string());
                self.helper.navigate(Route::ResetPassword { user_id });
            }
        }

        true
    }
}
