use clap::Subcommand;

#[derive(Subcommand)]
pub enum EventCommands {
    /// List events
    List,

    /// Add an event
    Add {
        #[arg(long)]
        title: String,

        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        dress_code: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Update an event
    Update {
        /// Event ID
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        dress_code: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an event
    Delete {
        /// Event ID
        id: i64,
    },
}
