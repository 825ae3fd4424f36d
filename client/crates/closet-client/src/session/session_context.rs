use crate::api::models::User;
use crate::session::{Session, SessionStore, StorageKey, StorageResult};

use std::sync::Arc;

use chrono::Utc;
use log::{info, warn};

/// The one read/write path to the persisted session.
///
/// Cloned into every screen; nothing caches the credential in memory, so
/// each read observes whatever the last writer stored.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Stored credential; blank values count as absent.
    pub async fn credential(&self) -> StorageResult<Option<String>> {
        let token = self.store.get(StorageKey::Token).await?;
        Ok(token.filter(|t| !t.trim().is_empty()))
    }

    pub async fn csrf_token(&self) -> StorageResult<Option<String>> {
        let token = self.store.get(StorageKey::CsrfToken).await?;
        Ok(token.filter(|t| !t.trim().is_empty()))
    }

    /// Stored user snapshot. An unparseable snapshot is ignored.
    pub async fn user(&self) -> StorageResult<Option<User>> {
        let Some(raw) = self.store.get(StorageKey::User).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!("Ignoring unreadable stored user: {e}");
                Ok(None)
            }
        }
    }

    pub async fn resolve(&self) -> StorageResult<Session> {
        Ok(Session {
            credential: self.credential().await?,
            user: self.user().await?,
            last_resolved_at: Utc::now(),
        })
    }

    /// Persist a freshly issued credential (login, signup verification, reset).
    pub async fn establish(&self, token: &str, user: Option<&User>) -> StorageResult<()> {
        self.store.set(StorageKey::Token, token).await?;
        match user {
            Some(user) => self.update_user(user).await?,
            None => self.store.remove(StorageKey::User).await?,
        }
        info!("Session established");
        Ok(())
    }

    pub async fn update_user(&self, user: &User) -> StorageResult<()> {
        let json = serde_json::to_string(user)?;
        self.store.set(StorageKey::User, &json).await
    }

    pub async fn store_csrf_token(&self, token: &str) -> StorageResult<()> {
        self.store.set(StorageKey::CsrfToken, token).await
    }

    /// Forget everything (logout, or the server rejected the credential).
    pub async fn clear(&self) -> StorageResult<()> {
        for key in StorageKey::ALL {
            self.store.remove(key).await?;
        }
        info!("Session cleared");
        Ok(())
    }
}
