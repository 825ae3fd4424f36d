//! User-facing texts shown by the screens.

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields.";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters.";
pub const PASSWORD_TOO_WEAK: &str = "Password is too weak. Please choose a stronger password.";
pub const AGE_NOT_POSITIVE: &str = "Age must be a positive number.";
pub const TERMS_NOT_ACCEPTED: &str = "You must accept the terms and conditions.";
pub const INVALID_REQUEST: &str = "Invalid request. Please try again.";
pub const ENTER_OTP: &str = "Please enter the OTP.";
pub const ENTER_EMAIL: &str = "Please enter your email.";
pub const NOTHING_TO_UPDATE: &str = "Nothing to update.";
pub const NAME_REQUIRED: &str = "Please enter a name.";
pub const TITLE_AND_DATE_REQUIRED: &str = "Please enter a title and a date.";

pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const SIGNUP_FAILED: &str = "Signup failed. Please try again.";
pub const OTP_FAILED: &str = "Invalid or expired OTP. Please try again.";
pub const RESET_REQUEST_FAILED: &str = "Failed to send OTP. Please try again.";
pub const RESET_FAILED: &str = "Failed to reset password. Please try again.";

pub const OTP_SENT: &str = "If an account with this email exists, an OTP has been sent.";
pub const EMAIL_VERIFIED: &str = "Email verified successfully! Redirecting to dashboard...";
pub const OTP_VERIFIED_FOR_RESET: &str = "OTP verified! Redirecting to set new password...";
pub const PASSWORD_RESET_DONE: &str = "Password has been reset successfully!";
pub const PROFILE_UPDATED: &str = "Profile updated.";
