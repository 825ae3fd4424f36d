use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the signed-in user's profile
    Show,

    /// Update profile fields; omitted fields are left unchanged
    Update {
        #[arg(long)]
        full_name: Option<String>,

        #[arg(long)]
        age: Option<u32>,

        #[arg(long)]
        gender: Option<String>,

        #[arg(long)]
        location: Option<String>,

        /// Image file to upload as the profile picture
        #[arg(long)]
        picture: Option<PathBuf>,
    },
}
