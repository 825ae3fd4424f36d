use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] closet_config::ConfigError),

    #[error(transparent)]
    Client(#[from] closet_client::ClientError),

    #[error("Failed to initialize logger: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to read {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    /// The screen finished with a message for the user.
    #[error("{message}")]
    Screen { message: String },

    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Failure reported by a screen; falls back to a generic text when the
    /// screen left no message.
    pub fn screen(message: Option<&str>) -> Self {
        Self::Screen {
            message: message
                .unwrap_or(closet_client::GENERIC_FAILURE_MESSAGE)
                .to_string(),
        }
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;
