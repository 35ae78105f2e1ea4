use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::MessageId;

/// Sender recorded when a push omits `from`.
pub const DEFAULT_FROM: &str = "unknown@external";

/// Subject recorded when a push omits `subject`.
pub const DEFAULT_SUBJECT: &str = "(no subject)";

/// One delivered item in an inbox.
///
/// Immutable once stored. The id and timestamp are assigned server-side
/// at delivery time; `date` serializes as an RFC 3339 string on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Message {
    /// Opaque random identifier.
    pub id: MessageId,
    /// Sender address, as reported by the collector.
    pub from: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
    /// Server-side delivery timestamp.
    pub date: DateTime<Utc>,
}

impl Message {
    /// Creates a message with a fresh random id and the current timestamp.
    ///
    /// Absent or empty `from`/`subject` fall back to [`DEFAULT_FROM`] and
    /// [`DEFAULT_SUBJECT`]; an absent `body` becomes the empty string.
    #[must_use]
    pub fn new(from: Option<String>, subject: Option<String>, body: Option<String>) -> Self {
        Self {
            id: MessageId::generate(),
            from: non_empty(from, DEFAULT_FROM),
            subject: non_empty(subject, DEFAULT_SUBJECT),
            body: body.unwrap_or_default(),
            date: Utc::now(),
        }
    }
}

fn non_empty(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(s) if !s.is_empty() => s,
        _ => fallback.to_owned(),
    }
}
