//! trellis: a minimal web application scaffold built around a segment-trie
//! request router.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client Request
//!   ─────────────▶ http::HttpServer ──▶ routing::Router::dispatch
//!                  (request id,          │ clean path
//!                   timeout, trace)      │ RouteCollection ─▶ RouteTrie
//!                                        │ Route::matches (MethodMatcher, ...)
//!                                        ▼
//!   Client Response ◀──────────────── Handler / not-found handler
//!
//!   app::Application owns config::AppConfig + Router; RouteProviders
//!   register routes before the router is frozen behind an Arc.
//! ```

pub mod app;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use app::{Application, RouteProvider};
pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{Route, RouteParams, Router};
