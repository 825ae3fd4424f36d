//! Backend endpoint paths. Trailing slashes are significant to the server.

pub const LOGIN: &str = "/api/auth/login/";
pub const SIGNUP: &str = "/api/auth/signup/";
pub const VERIFY_OTP: &str = "/api/auth/verify-otp/";
pub const PASSWORD_RESET: &str = "/api/auth/password-reset/";
pub const PASSWORD_RESET_CONFIRM: &str = "/api/auth/password-reset-confirm/";
pub const PROFILE: &str = "/api/auth/profile/";
pub const CSRF_TOKEN: &str = "/api/auth/csrf-token/";
pub const GOOGLE_LOGIN: &str = "/accounts/google/login/";

pub const CLOSET_ITEMS: &str = "/api/closet/items/";
pub const EVENTS: &str = "/api/events/";
pub const RECOMMENDATIONS: &str = "/api/recommendations/";

pub fn closet_item(id: i64) -> String {
    format!("{CLOSET_ITEMS}{id}/")
}

pub fn event(id: i64) -> String {
    format!("{EVENTS}{id}/")
}
