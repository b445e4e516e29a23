//! HTTP transport subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection (tokio listener)
//!     → server.rs (Axum/hyper parsing, middleware)
//!     → request.rs (assign or keep x-request-id)
//!     → routing::Router::dispatch
//!     → response written back unchanged
//! ```

pub mod request;
pub mod server;

pub use request::{RequestIdExt, UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
