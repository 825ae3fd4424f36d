use crate::navigation::{OtpPurpose, Route};
use crate::request::RequestHelper;
use crate::screens::messages;

use log::warn;

pub struct ForgotPasswordScreen {
    helper: RequestHelper,
    pub email: String,
    pub error: Option<String>,
    pub message: Option<String>,
    pub is_loading: bool,
}

impl ForgotPasswordScreen {
    pub fn new(helper: RequestHelper) -> Self {
        Self {
            helper,
            email: String::new(),
            error: None,
            message: None,
            is_loading: false,
        }
    }

    /// Ask for a reset code. Continues to verification only when the server
    /// returns a user id.
    pub async fn submit(&mut self) -> bool {
        self.error = None;
        self.message = None;

        let email = self.email.trim().to_string();
        if email.is_empty() {
            self.error = Some(messages::ENTER_EMAIL.to_string());
            return false;
        }

        self.is_loading = true;
        let result = self.helper.api().request_password_reset(&email).await;
        self.is_loading = false;

        match result {
            Ok(response) => {
                self.message = Some(
                    response
                        .message
                        .unwrap_or_else(|| messages::OTP_SENT.to_string()),
                );
                if let Some(user_id) = response.user_id {
                    self.helper.navigate(Route::VerifyOtp {
                        user_id,
                        purpose: OtpPurpose::PasswordReset,
                    });
                }
                true
            }
            Err(e) => {
                warn!("Password reset request failed: {e}");
                self.error = Some(e.user_message_or(messages::RESET_REQUEST_FAILED));
                false
            }
        }
    }
}
