use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ClosetCommands {
    /// List wardrobe items
    List,

    /// Add an item
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        color: Option<String>,

        #[arg(long)]
        season: Option<String>,

        /// Photo of the item
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Update an item
    Update {
        /// Item ID
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        color: Option<String>,

        #[arg(long)]
        season: Option<String>,
    },

    /// Delete an item
    Delete {
        /// Item ID
        id: i64,
    },
}
