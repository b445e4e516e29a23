//! Configuration schema definitions.
//!
//! All types derive Serde traits for (de)serialization from TOML. Every
//! field has a default so a minimal or missing config file is valid.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Environment name (e.g. "production", "local").
    pub env: String,

    /// Listener settings (host, port).
    pub server: ServerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: "production".to_string(),
            server: ServerConfig::default(),
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host or IP to bind.
    pub host: String,

    /// Port to bind (0 picks a free port).
    pub port: u16,
}

impl ServerConfig {
    /// `host:port` as accepted by `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default log filter when `RUST_LOG` is not set.
    pub log_level: String,

    /// Emit JSON log lines instead of the human readable format.
    pub json_logs: bool,

    /// Expose a Prometheus scrape endpoint.
    pub metrics_enabled: bool,

    /// Bind address for the metrics endpoint.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
