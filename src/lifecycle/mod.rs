//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     trigger() → every ShutdownSignal resolves → server stops accepting → drain → exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger()
//! ```
//!
//! # Design Decisions
//! - Startup order lives in `app::Application::run`: config, logging, metrics, listener
//! - Shutdown is cooperative: tasks observe the signal and finish in-flight work

pub mod shutdown;
pub mod signals;

pub use shutdown::{Shutdown, ShutdownSignal};
