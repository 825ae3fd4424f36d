use crate::api::models::User;
use crate::api::paths;
use crate::navigation::Route;
use crate::request::RequestHelper;

use log::{info, warn};

/// Home screen after login: greets the user and links to the rest.
pub struct DashboardScreen {
    helper: RequestHelper,
    pub user: Option<User>,
    pub error: Option<String>,
    pub is_loading: bool,
}

impl DashboardScreen {
    pub fn new(helper: RequestHelper) -> Self {
        Self {
            helper,
            user: None,
            error: None,
            is_loading: false,
        }
    }

    /// Fetch the profile. A failure keeps whatever was shown before.
    pub async fn load(&mut self) -> bool {
        self.error = None;
        self.is_loading = true;

        let result = self.helper.get::<User>(paths::PROFILE).await;
        self.is_loading = false;

        match result {
            Ok(user) => {
                if let Err(e) = self.helper.session().update_user(&user).await {
                    warn!("Could not cache user snapshot: {e}");
                }
                self.user = Some(user);
                true
            }
            Err(e) => {
                warn!("Failed to fetch user profile: {e}");
                self.error = Some(e.user_message());
                false
            }
        }
    }

    pub fn greeting_name(&self) -> Option<&str> {
        self.user.as_ref().map(User::display_name)
    }

    /// Profile picture as a full URL, if the user has one.
    pub fn profile_picture_url(&self) -> Option<String> {
        self.user
            .as_ref()
            .and_then(|u| u.profile.as_ref())
            .and_then(|p| p.profile_picture.as_deref())
            .filter(|p| !p.trim().is_empty())
            .map(|p| self.helper.api().absolute_url(p))
    }

    pub async fn logout(&mut self) {
        if let Err(e) = self.helper.session().clear().await {
            warn!("Could not clear session on logout: {e}");
        }
        self.user = None;
        info!("Logged out");
        self.helper.navigate(Route::Login);
    }

    /// Follow one of the dashboard's links.
    pub fn open(&self, route: Route) {
        self.helper.navigate(route);
    }
}
