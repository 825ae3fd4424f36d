use crate::api::models::{ProfileUpdate, User};
use crate::api::paths;
use crate::request::{RequestBody, RequestHelper};
use crate::screens::messages;

use log::warn;

const PICTURE_FIELD: &str = "profile_picture";

pub struct ProfileScreen {
    helper: RequestHelper,
    pub user: Option<User>,
    pub error: Option<String>,
    pub message: Option<String>,
    pub is_loading: bool,
}

impl ProfileScreen {
    pub fn new(helper: RequestHelper) -> Self {
        Self {
            helper,
            user: None,
            error: None,
            message: None,
            is_loading: false,
        }
    }

    pub async fn mount(&mut self) -> bool {
        self.helper.refresh_csrf_token().await;
        self.load().await
    }

    pub async fn load(&mut self) -> bool {
        self.error = None;
        self.is_loading = true;
        let result = self.helper.get::<User>(paths::PROFILE).await;
        self.is_loading = false;

        match result {
            Ok(user) => {
                self.user = Some(user);
                true
            }
            Err(e) => {
                warn!("Failed to load profile: {e}");
                self.error = Some(e.user_message());
                false
            }
        }
    }

    /// PATCH the changed fields; multipart when a new picture is attached.
    pub async fn save(&mut self, update: ProfileUpdate) -> bool {
        self.error = None;
        self.message = None;

        if update.is_empty() {
            self.error = Some(messages::NOTHING_TO_UPDATE.to_string());
            return false;
        }

        let fields = update.fields();
        let body = RequestBody::form(fields, PICTURE_FIELD, update.profile_picture);

        self.is_loading = true;
        let result = self.helper.update::<User>(paths::PROFILE, body).await;
        self.is_loading = false;

        match result {
            Ok(user) => {
                if let Err(e) = self.helper.session().update_user(&user).await {
                    warn!("Could not cache user snapshot: {e}");
                }
                self.user = Some(user);
                self.message = Some(messages::PROFILE_UPDATED.to_string());
                true
            }
            Err(e) => {
                warn!("Failed to update profile: {e}");
                self.error = Some(e.user_message());
                false
            }
        }
    }
}
