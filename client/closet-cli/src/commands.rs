use crate::{
    closet_commands::ClosetCommands, event_commands::EventCommands,
    profile_commands::ProfileCommands, recommendation_commands::RecommendationCommands,
};

use closet_client::OtpPurpose;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Resolve the stored session and print where the app would open
    Start {
        /// Override the minimum splash duration (milliseconds)
        #[arg(long)]
        min_duration_ms: Option<u64>,
    },

    /// Log in with email and password
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Create an account; a one-time code is emailed for verification
    Signup {
        #[arg(long)]
        full_name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Repeat of --password
        #[arg(long)]
        confirm_password: String,

        #[arg(long)]
        age: String,

        #[arg(long)]
        gender: String,

        #[arg(long)]
        location: String,

        /// Accept the terms and conditions
        #[arg(long)]
        accept_terms: bool,
    },

    /// Submit a one-time code
    VerifyOtp {
        #[arg(long)]
        user_id: String,

        /// signup or password_reset
        #[arg(long)]
        purpose: OtpPurpose,

        #[arg(long)]
        code: String,
    },

    /// Request a password reset code
    ForgotPassword {
        #[arg(long)]
        email: String,
    },

    /// Set a new password after verifying a reset code
    ResetPassword {
        #[arg(long)]
        user_id: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        confirm_password: String,
    },

    /// Forget the stored session
    Logout,

    /// Profile operations
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Wardrobe operations
    Closet {
        #[command(subcommand)]
        action: ClosetCommands,
    },

    /// Event operations
    Events {
        #[command(subcommand)]
        action: EventCommands,
    },

    /// Outfit recommendations
    Recommendations {
        #[command(subcommand)]
        action: RecommendationCommands,
    },

    /// Score a candidate password (0-4)
    Strength { password: String },
}
