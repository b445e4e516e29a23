//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (at startup):
//!     Router::get/post/.../group
//!     → route.rs (normalize path, methods, name)
//!     → collection.rs (store route, index by name)
//!     → trie.rs (insert route id under its path segments)
//!
//! Incoming Request (method, path):
//!     → router.rs (clean path)
//!     → collection.rs / trie.rs (candidate routes + named params)
//!     → matcher.rs (filter candidates, method first)
//!     → first accepting route's handler, or the not-found handler
//! ```
//!
//! # Design Decisions
//! - Routes registered at startup, read-only while serving
//! - Segment trie, no regex, no wildcards
//! - Literal segments take precedence over named parameters
//! - First registered accepting route wins

pub mod collection;
pub mod handler;
pub mod matcher;
pub mod params;
pub mod path;
pub mod route;
pub mod router;
pub mod trie;

pub use collection::{RouteCollection, RouteId, RouteMatchGroup};
pub use handler::Handler;
pub use matcher::{matcher_fn, Matcher, MatcherFn, MethodMatcher};
pub use params::RouteParams;
pub use route::Route;
pub use router::Router;
pub use trie::RouteTrie;
