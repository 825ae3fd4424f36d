//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use closet_client::{
    ApiClient, MemorySessionStore, RecordingNavigator, RequestHelper, SessionContext,
    SessionStore, StorageKey,
};
use closet_config::ApiConfig;

use std::sync::Arc;

use wiremock::MockServer;

pub const TOKEN: &str = "abc123";
pub const CSRF: &str = "csrf-xyz";

/// A helper wired to a mock backend, an in-memory session and a navigator
/// that records where the user was sent.
pub struct Harness {
    pub server: MockServer,
    pub store: Arc<MemorySessionStore>,
    pub navigator: Arc<RecordingNavigator>,
    pub helper: RequestHelper,
}

impl Harness {
    pub async fn logged_out() -> Self {
        Self::with_store(MemorySessionStore::new()).await
    }

    pub async fn logged_in() -> Self {
        Self::with_store(MemorySessionStore::with_credential(TOKEN)).await
    }

    /// Logged in with an anti-forgery token already stored.
    pub async fn logged_in_with_csrf() -> Self {
        let harness = Self::logged_in().await;
        harness
            .store
            .set(StorageKey::CsrfToken, CSRF)
            .await
            .unwrap();
        harness
    }

    async fn with_store(store: MemorySessionStore) -> Self {
        let server = MockServer::start().await;
        let store = Arc::new(store);
        let navigator = Arc::new(RecordingNavigator::new());

        let config = ApiConfig {
            base_url: server.uri(),
            ..ApiConfig::default()
        };
        let api = ApiClient::new(&config).unwrap();
        let helper = RequestHelper::new(api, SessionContext::new(store.clone()), navigator.clone());

        Self {
            server,
            store,
            navigator,
            helper,
        }
    }

    pub fn session_cleared(&self) -> bool {
        StorageKey::ALL
            .iter()
            .all(|key| self.store.peek(*key).is_none())
    }
}
