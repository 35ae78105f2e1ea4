//! Inbox store abstraction trait.
//!
//! Allows swapping between the durable SQLite backend and the in-process
//! map without changing the service logic. The backend is selected at
//! startup; nothing falls back to a hidden global.

use async_trait::async_trait;

use mailbin_core::Inbox;

use crate::StoreError;

/// Key-value inbox storage, keyed by normalized email address.
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Consistency
/// Callers perform a whole-inbox read-modify-write per logical operation.
/// Two concurrent writers to the same key can lose an update (both load the
/// same prior state, the second save wins); that is accepted for this
/// demo-grade service and implementations are not required to prevent it.
#[async_trait]
pub trait InboxStore: Send + Sync {
    /// Load the inbox stored under `email`, or `None` if it does not exist.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] if the backend read fails, or
    /// [`StoreError::Payload`] if a stored record cannot be decoded.
    async fn load(&self, email: &str) -> Result<Option<Inbox>, StoreError>;

    /// Store `inbox` under its email key, replacing any previous record.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] if the backend write fails.
    async fn save(&self, inbox: &Inbox) -> Result<(), StoreError>;
}
