use crate::api::models::User;

use chrono::{DateTime, Utc};

/// Snapshot of the persisted session at the moment it was read.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub credential: Option<String>,
    pub user: Option<User>,
    pub last_resolved_at: DateTime<Utc>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }
}
