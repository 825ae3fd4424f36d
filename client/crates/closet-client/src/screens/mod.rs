//! View-state controllers, one per screen.
//!
//! A screen owns its state exclusively, reports failures through its
//! `error` field, and never lets an error escape to the caller. Anything
//! session-scoped goes through `RequestHelper`.

pub(crate) mod closet;
pub(crate) mod collection;
pub(crate) mod dashboard;
pub(crate) mod events;
pub(crate) mod forgot_password;
pub(crate) mod login;
pub mod messages;
pub(crate) mod profile;
pub(crate) mod recommendations;
pub(crate) mod reset_password;
pub(crate) mod signup;
pub(crate) mod verify_otp;

pub use closet::ClosetScreen;
pub use collection::{CollectionState, Identified};
pub use dashboard::DashboardScreen;
pub use events::EventsScreen;
pub use forgot_password::ForgotPasswordScreen;
pub use login::LoginScreen;
pub use profile::ProfileScreen;
pub use recommendations::RecommendationsScreen;
pub use reset_password::ResetPasswordScreen;
pub use signup::{SignupForm, SignupScreen};
pub use verify_otp::VerifyOtpScreen;
