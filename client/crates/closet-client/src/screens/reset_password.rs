use crate::navigation::Route;
use crate::password::{self, MIN_ACCEPTABLE_SCORE, StrengthLevel};
use crate::request::RequestHelper;
use crate::screens::messages;

use log::{info, warn};

pub struct ResetPasswordScreen {
    helper: RequestHelper,
    user_id: Option<String>,
    new_password: String,
    pub confirm_password: String,
    strength: u8,
    pub error: Option<String>,
    pub message: Option<String>,
    pub is_loading: bool,
}

impl ResetPasswordScreen {
    pub fn new(helper: RequestHelper, user_id: Option<String>) -> Self {
        Self {
            helper,
            user_id: user_id.filter(|id| !id.trim().is_empty()),
            new_password: String::new(),
            confirm_password: String::new(),
            strength: 0,
            error: None,
            message: None,
            is_loading: false,
        }
    }

    pub fn mount(&mut self) -> bool {
        if self.user_id.is_none() {
            self.error = Some(messages::INVALID_REQUEST.to_string());
            self.helper.navigate(Route::Login);
            return false;
        }
        true
    }

    /// Update the password and its live strength score.
    pub fn set_new_password(&mut self, password: impl Into<String>) {
        self.new_password = password.into();
        self.strength = password::score(&self.new_password);
    }

    pub fn strength(&self) -> u8 {
        self.strength
    }

    pub fn strength_level(&self) -> StrengthLevel {
        StrengthLevel::from_score(self.strength)
    }

    pub async fn submit(&mut self) -> bool {
        self.error = None;
        self.message = None;

        let Some(user_id) = self.user_id.clone() else {
            self.error = Some(messages::INVALID_REQUEST.to_string());
            return false;
        };

        if self.new_password.is_empty() || self.confirm_password.is_empty() {
            self.error = Some(messages::FILL_ALL_FIELDS.to_string());
            return false;
        }

        if self.new_password != self.confirm_password {
            self.error = Some(messages::PASSWORDS_DO_NOT_MATCH.to_string());
            return false;
        }

        if self.strength < MIN_ACCEPTABLE_SCORE {
            self.error = Some(messages::PASSWORD_TOO_WEAK.to_string());
            return false;
        }

        self.is_loading = true;
        let result = self
            .helper
            .api()
            .confirm_password_reset(&user_id, &self.new_password, &self.confirm_password)
            .await;
        self.is_loading = false;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                warn!("Password reset failed: {e}");
                self.error = Some(e.user_message_or(messages::RESET_FAILED));
                return false;
            }
        };

        let session = self.helper.session();
        let stored = match (response.token.as_deref(), response.user.as_ref()) {
            (Some(token), user) => session.establish(token, user).await,
            (None, Some(user)) => session.update_user(user).await,
            (None, None) => Ok(()),
        };
        if let Err(e) = stored {
            warn!("Could not persist session after password reset: {e}");
        }

        info!("Password reset for user {user_id}");
        self.message = Some(
            response
                .message
                .unwrap_or_else(|| messages::PASSWORD_RESET_DONE.to_string()),
        );
        self.new_password.clear();
        self.confirm_password.clear();
        self.strength = 0;
        self.helper.navigate(Route::Login);
        true
    }
}
