use clap::Subcommand;

#[derive(Subcommand)]
pub enum RecommendationCommands {
    /// List recommendations, optionally for one event
    List {
        #[arg(long)]
        event_id: Option<i64>,
    },
}
