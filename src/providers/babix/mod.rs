//! Client for the Babix answering service.
//!
//! The service is a black box behind `POST /api/ask`; the client only
//! depends on the request/response contract in [`types`] and folds every
//! failure mode into [`errors::ServiceError`].

mod client;
mod errors;
mod types;

pub use client::{BabixClient, ServiceConfig, DEFAULT_BASE_URL};
pub use errors::{ServiceError, ServiceErrorKind};
pub use types::{AskRequest, AskResponse};
