pub(crate) mod error;
pub(crate) mod file_session_store;
pub(crate) mod memory_session_store;
pub(crate) mod session;
pub(crate) mod session_context;
pub(crate) mod session_store;
pub(crate) mod storage_key;

pub use error::{Result as StorageResult, StorageError};
pub use file_session_store::FileSessionStore;
pub use memory_session_store::MemorySessionStore;
pub use session::Session;
pub use session_context::SessionContext;
pub use session_store::SessionStore;
pub use storage_key::StorageKey;
