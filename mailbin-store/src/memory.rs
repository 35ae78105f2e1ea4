//! In-process inbox store.
//!
//! Holds every inbox in a map guarded by an async `RwLock`. State lives as
//! long as the process; intended for local runs and tests where no database
//! path is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use mailbin_core::Inbox;

use crate::{InboxStore, StoreError};

/// Process-local inbox store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inboxes: RwLock<HashMap<String, Inbox>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InboxStore for MemoryStore {
    async fn load(&self, email: &str) -> Result<Option<Inbox>, StoreError> {
        Ok(self.inboxes.read().await.get(email).cloned())
    }

    async fn save(&self, inbox: &Inbox) -> Result<(), StoreError> {
        self.inboxes
            .write()
            .await
            .insert(inbox.email.clone(), inbox.clone());
        Ok(())
    }
}
