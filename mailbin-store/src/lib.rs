//! Inbox storage for the mailbin disposable-inbox service.
//!
//! Provides the [`InboxStore`] abstraction with a durable SQLite backend and
//! an in-process map, plus the [`InboxService`] that implements address
//! minting, delivery, and retrieval on top of either one.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod memory;
pub mod service;
pub mod sqlite;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use service::InboxService;
pub use sqlite::SqliteStore;
pub use store::InboxStore;
