//! closet-cli
//!
//! Terminal host for the ClosetAI client: each command drives one screen
//! controller and prints its result as JSON.

pub(crate) mod app;
pub(crate) mod cli;
pub(crate) mod closet_commands;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod event_commands;
pub(crate) mod logger;
pub(crate) mod profile_commands;
pub(crate) mod recommendation_commands;
pub(crate) mod terminal;

#[cfg(test)]
mod tests;

pub use app::App;
pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use logger::initialize as initialize_logger;
pub use terminal::TerminalNavigator;

use closet_client::FileSessionStore;
use closet_config::Config;

use std::sync::Arc;

use serde_json::Value;

/// Load configuration, set up logging and the session store, then run the
/// parsed command.
pub async fn execute(cli: Cli) -> CliResult<Value> {
    let mut config = Config::load()?;
    if let Some(server) = cli.server {
        config.api.base_url = server;
    }
    config.validate()?;

    initialize_logger(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let store = Arc::new(FileSessionStore::new(config.session_path()?));
    let app = App::new(config, store)?;
    app.run(cli.command).await
}
