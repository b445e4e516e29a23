//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config/app.toml
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → handed to Application / HttpServer by value
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_config_dir, ConfigError};
pub use schema::AppConfig;
pub use schema::ObservabilityConfig;
pub use schema::ServerConfig;
pub use schema::TimeoutConfig;
