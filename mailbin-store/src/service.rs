//! High-level inbox operations over an [`InboxStore`].
//!
//! Owns the normalization and defaulting rules; the HTTP layer maps requests
//! onto these calls and errors onto status codes.

use std::sync::Arc;

use mailbin_core::{normalize_email, normalize_name, DomainList, Inbox, Message};

use crate::{InboxStore, StoreError};

/// Inbox operations: mint addresses, deliver messages, read them back.
///
/// Every operation is a single load-save round trip against one inbox key.
/// Safe to call concurrently; see the consistency note on [`InboxStore`].
pub struct InboxService {
    store: Arc<dyn InboxStore>,
    domains: DomainList,
}

impl InboxService {
    /// Create a service over the given store and domain configuration.
    #[must_use]
    pub fn new(store: Arc<dyn InboxStore>, domains: DomainList) -> Self {
        Self { store, domains }
    }

    /// The configured domains, default first.
    #[must_use]
    pub fn domains(&self) -> &[String] {
        self.domains.as_slice()
    }

    /// Mint an address from a requested name and domain.
    ///
    /// The name is normalized (whitespace stripped, lowercased, truncated,
    /// empty falls back to `"user"`); the domain resolves to the default when
    /// absent or unlisted. Ensures an inbox record exists for the address and
    /// leaves an existing one untouched. Never rejects its inputs.
    ///
    /// # Errors
    /// Propagates [`StoreError`] from the underlying store.
    pub async fn create_address(
        &self,
        name: Option<&str>,
        domain: Option<&str>,
    ) -> Result<String, StoreError> {
        let name = normalize_name(name.unwrap_or_default());
        let domain = self.domains.resolve(domain);
        let email = format!("{name}@{domain}");

        if self.store.load(&email).await?.is_none() {
            self.store.save(&Inbox::new(email.clone())).await?;
            tracing::info!(email = %email, "address minted");
        }
        Ok(email)
    }

    /// Read the inbox for `email`, or an empty one if it has never been
    /// written. Does not create a record.
    ///
    /// # Errors
    /// Propagates [`StoreError`] from the underlying store.
    pub async fn list_messages(&self, email: &str) -> Result<Inbox, StoreError> {
        let email = normalize_email(email);
        match self.store.load(&email).await? {
            Some(inbox) => Ok(inbox),
            None => Ok(Inbox::new(email)),
        }
    }

    /// Deliver a message to `to`, creating the inbox if absent.
    ///
    /// Assigns a fresh random id and server-side timestamp, inserts the
    /// message newest-first, and drops entries beyond the retention cap.
    /// Returns the stored message.
    ///
    /// # Errors
    /// Propagates [`StoreError`] from the underlying store.
    pub async fn push_message(
        &self,
        to: &str,
        from: Option<String>,
        subject: Option<String>,
        body: Option<String>,
    ) -> Result<Message, StoreError> {
        let email = normalize_email(to);
        let mut inbox = match self.store.load(&email).await? {
            Some(inbox) => inbox,
            None => Inbox::new(email),
        };

        let message = Message::new(from, subject, body);
        inbox.push(message.clone());
        self.store.save(&inbox).await?;

        tracing::debug!(
            email = %inbox.email,
            id = %message.id,
            count = inbox.messages.len(),
            "message delivered"
        );
        Ok(message)
    }
}
