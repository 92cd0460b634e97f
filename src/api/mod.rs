//! HTTP surface for the symptom checker.
//!
//! `build_router()` returns a composable `Router`; `start_server()` binds and
//! serves it with a shutdown handle.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::build_router;
pub use server::{start_server, ApiServer, ServerError};
pub use types::ApiContext;
