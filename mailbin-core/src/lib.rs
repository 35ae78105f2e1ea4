//! Core types for the mailbin disposable-inbox service.
//!
//! Defines the fundamental domain types: inboxes, messages, message ids,
//! the configured domain set, and address normalization rules.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod address;
pub mod domain;
pub mod error;
pub mod id;
pub mod inbox;
pub mod message;

pub use address::{normalize_email, normalize_name, DEFAULT_NAME, MAX_NAME_CHARS};
pub use domain::DomainList;
pub use error::CoreError;
pub use id::MessageId;
pub use inbox::{Inbox, MAX_MESSAGES};
pub use message::{Message, DEFAULT_FROM, DEFAULT_SUBJECT};
