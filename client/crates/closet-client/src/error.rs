use crate::session::StorageError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Shown when a request fails and the server gave nothing better to say.
pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed. Please try again.";
/// Shown when an action needs a session and none is stored.
pub const LOGIN_REQUIRED_MESSAGE: &str = "Please log in to continue.";
/// Shown after the server rejects the stored credential.
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// Errors that can occur while talking to the backend or the session store
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("No stored credential {location}")]
    MissingCredential { location: ErrorLocation },

    #[error("Credential rejected by server (status: {status}) {location}")]
    AuthExpired { status: u16, location: ErrorLocation },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error(
        "API error: {detail} (status: {status}) {location}",
        detail = .message.as_deref().unwrap_or("no message")
    )]
    Api {
        status: u16,
        message: Option<String>,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Session storage error: {source} {location}")]
    Storage {
        #[source]
        source: StorageError,
        location: ErrorLocation,
    },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    #[track_caller]
    pub fn missing_credential() -> Self {
        ClientError::MissingCredential {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn auth_expired(status: u16) -> Self {
        ClientError::AuthExpired {
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api(status: u16, message: Option<String>) -> Self {
        ClientError::Api {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        ClientError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// HTTP status of a server-reported failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::AuthExpired { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the user has to log in (again) before retrying.
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::MissingCredential { .. } | Self::AuthExpired { .. })
    }

    /// Text a screen displays for this error.
    pub fn user_message(&self) -> String {
        self.user_message_or(GENERIC_FAILURE_MESSAGE)
    }

    /// Like `user_message`, with a screen-specific text in place of the generic one.
    pub fn user_message_or(&self, fallback: &str) -> String {
        match self {
            Self::MissingCredential { .. } => String::from(LOGIN_REQUIRED_MESSAGE),
            Self::AuthExpired { .. } => String::from(SESSION_EXPIRED_MESSAGE),
            Self::Api {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Validation { message, .. } => message.clone(),
            Self::Api { message: None, .. }
            | Self::Http { .. }
            | Self::Json { .. }
            | Self::Storage { .. } => String::from(fallback),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<StorageError> for ClientError {
    #[track_caller]
    fn from(source: StorageError) -> Self {
        ClientError::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
