//! HTTP API gateway for the mailbin disposable-inbox service.
//!
//! Exposes the address-minting, delivery, and polling endpoints consumed by
//! the static frontend and by external collectors.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
