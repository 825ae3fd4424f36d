//! closet-client
//!
//! Headless client core for the ClosetAI backend: persisted session,
//! startup routing, the authenticated request helper, and the view-state
//! controllers each screen is built from.

pub mod api;
pub mod bootstrap;
pub mod error;
pub mod navigation;
pub mod password;
pub mod request;
pub mod screens;
pub mod session;

#[cfg(test)]
mod tests;

pub use api::ApiClient;
pub use bootstrap::{
    AnimationCompleter, AnimationSignal, BootstrapHandle, BootstrapState, Bootstrapper,
    StartupTimings, ViewLifecycle,
};
pub use error::{
    ClientError, ClientResult, GENERIC_FAILURE_MESSAGE, LOGIN_REQUIRED_MESSAGE,
    SESSION_EXPIRED_MESSAGE,
};
pub use navigation::{HostShell, Navigator, NoopHostShell, OtpPurpose, RecordingNavigator, Route};
pub use request::{AccessKind, RequestBody, RequestHelper};
pub use session::{
    FileSessionStore, MemorySessionStore, Session, SessionContext, SessionStore, StorageError,
    StorageKey, StorageResult,
};
