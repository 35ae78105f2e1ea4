use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of random bytes behind a message identifier.
const MESSAGE_ID_BYTES: usize = 12;

/// Opaque identifier for a delivered message.
///
/// Format: 24 lowercase hex characters (12 random bytes), assigned
/// server-side at delivery time. Callers never supply ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct MessageId(pub String);

impl MessageId {
    /// Generates a new random `MessageId`.
    #[must_use]
    pub fn generate() -> Self {
        use std::fmt::Write as _;

        let bytes: [u8; MESSAGE_ID_BYTES] = rand::random();
        let mut hex = String::with_capacity(MESSAGE_ID_BYTES * 2);
        for byte in bytes {
            // Writing to a String never fails.
            let _ = write!(hex, "{byte:02x}");
        }
        Self(hex)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MessageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
