//! Relay server forwarding `GET /weather?city=` to the upstream provider.
//!
//! The relay does no normalization: successful upstream bodies are returned verbatim.

pub mod errors;
pub mod logging;
pub mod routes;

pub use errors::RelayError;
pub use routes::{AppState, router};
