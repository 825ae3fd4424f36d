use crate::navigation::Route;
use crate::request::RequestHelper;
use crate::screens::messages;

use log::{info, warn};

pub struct LoginScreen {
    helper: RequestHelper,
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub is_loading: bool,
}

impl LoginScreen {
    pub fn new(helper: RequestHelper) -> Self {
        Self {
            helper,
            email: String::new(),
            password: String::new(),
            error: None,
            is_loading: false,
        }
    }

    /// Show an error handed over by the screen that redirected here.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn google_login_url(&self) -> String {
        self.helper.api().google_login_url()
    }

    pub async fn submit(&mut self) -> bool {
        self.error = None;

        if self.email.trim().is_empty() || self.password.is_empty() {
            self.error = Some(messages::FILL_ALL_FIELDS.to_string());
            return false;
        }

        self.is_loading = true;
        let result = self
            .helper
            .api()
            .login(self.email.trim(), &self.password)
            .await;
        self.is_loading = false;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                warn!("Login failed: {e}");
                self.error = Some(e.user_message_or(messages::LOGIN_FAILED));
                return false;
            }
        };

        if let Err(e) = self
            .helper
            .session()
            .establish(&response.token, response.user.as_ref())
            .await
        {
            warn!("Could not persist session after login: {e}");
            self.error = Some(messages::LOGIN_FAILED.to_string());
            return false;
        }

        info!("Logged in");
        self.password.clear();
        self.helper.navigate(Route::Dashboard);
        true
    }
}
