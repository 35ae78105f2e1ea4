use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Maximum number of messages retained per inbox.
///
/// Deliveries beyond the cap silently drop the oldest entries.
pub const MAX_MESSAGES: usize = 200;

/// The message collection associated with one generated address.
///
/// Messages are kept newest first. Inboxes are created lazily on first
/// create or push and are never explicitly deleted (no TTL).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Inbox {
    /// The address this inbox belongs to, used as the store key.
    pub email: String,
    /// Delivered messages, newest first, at most [`MAX_MESSAGES`].
    pub messages: Vec<Message>,
}

impl Inbox {
    /// Creates an empty inbox for `email`.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            messages: Vec::new(),
        }
    }

    /// Inserts `message` at the front and drops entries beyond [`MAX_MESSAGES`].
    pub fn push(&mut self, message: Message) {
        self.messages.insert(0, message);
        self.messages.truncate(MAX_MESSAGES);
    }
}
