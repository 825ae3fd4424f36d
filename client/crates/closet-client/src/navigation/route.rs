use crate::navigation::OtpPurpose;

use std::fmt;

/// Every destination a screen can send the user to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    ForgotPassword,
    VerifyOtp { user_id: String, purpose: OtpPurpose },
    ResetPassword { user_id: String },
    Dashboard,
    Closet,
    Events,
    Recommendations,
    Profile,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::ForgotPassword => "/forgot-password",
            Route::VerifyOtp { .. } => "/verify-otp",
            Route::ResetPassword { .. } => "/reset-password",
            Route::Dashboard => "/dashboard",
            Route::Closet => "/closet",
            Route::Events => "/events",
            Route::Recommendations => "/recommendations",
            Route::Profile => "/profile",
        }
    }

    /// Routes reachable without a session.
    pub fn is_public(&self) -> bool {
        matches!(
            self,
            Route::Login
                | Route::Signup
                | Route::ForgotPassword
                | Route::VerifyOtp { .. }
                | Route::ResetPassword { .. }
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::VerifyOtp { user_id, purpose } => {
                write!(f, "{}?user_id={user_id}&purpose={purpose}", self.path())
            }
            Route::ResetPassword { user_id } => write!(f, "{}?user_id={user_id}", self.path()),
            _ => f.write_str(self.path()),
        }
    }
}
