//! API Layer Module
//!
//! HTTP server, route handlers, and response envelopes.

pub mod envelope;
pub mod routes;
pub mod server;

// Re-exports for convenience
pub use envelope::{codes, ErrorBody, ErrorData, FailResponse};
pub use server::{create_router, start_server, AppState, SharedAppState};
