//! Babix terminal client library.
//!
//! Exposes the conversation session engine and its collaborators for the
//! binary and for tests.

pub mod app;
pub mod chat;
pub mod config;
pub mod logging;
pub mod providers;
pub mod render;
pub mod session;
