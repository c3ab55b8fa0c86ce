//! Explorer Backend - Address API Service
//!
//! Server-side API for a blockchain explorer. Proxies address-centric
//! queries to an external chain gateway and reshapes the results into
//! uniform `{ok, ...}` JSON envelopes for the frontend.
//!
//! ## Layout
//!
//! - `gateway` - JSON-RPC client for the chain gateway, behind a trait seam
//! - `types` - Address, transfer, execution, deposit, and vote records
//! - `api` - Axum router, handlers, and response envelopes
//! - `config` / `logging` / `error` - Service plumbing
//!
//! The frontend rendering layer, state store, and the gateway itself live
//! elsewhere; this crate is only the API between them.

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod types;

// Re-exports: Configuration
pub use config::{ConfigError, ExplorerConfig, Network};

// Re-exports: Errors
pub use error::{ExplorerError, Result};

// Re-exports: Gateway client
pub use gateway::{Gateway, GatewayError, HttpGateway};

// Re-exports: API surface
pub use api::{create_router, start_server, AppState, SharedAppState};

// Re-exports: Domain records
pub use types::{AddressDetails, Deposit, Execution, Transfer, Vote};
