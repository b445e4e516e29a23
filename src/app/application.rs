//! Application bootstrap.
//!
//! # Responsibilities
//! - Own the configuration and the router for one process
//! - Derive the standard project paths from a base path
//! - Let route providers register their routes
//! - Start the HTTP server on the configured host and port
//!
//! # Design Decisions
//! - No global instance: the application is built once and passed by value
//! - Collaborators are typed fields, not entries in a string-keyed container
//! - The router is frozen (moved into an `Arc`) when the server starts

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{load_config_dir, AppConfig, ConfigError};
use crate::http::HttpServer;
use crate::lifecycle::ShutdownSignal;
use crate::observability::metrics;
use crate::routing::Router;

/// Error type for starting the application.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    Io(#[from] io::Error),
}

/// Something that contributes routes to an application.
pub trait RouteProvider {
    fn register(&self, router: &mut Router);
}

impl<F> RouteProvider for F
where
    F: Fn(&mut Router),
{
    fn register(&self, router: &mut Router) {
        self(router)
    }
}

/// A configured application: base path, config and router.
#[derive(Debug)]
pub struct Application {
    base_path: PathBuf,
    config: AppConfig,
    router: Router,
}

impl Application {
    /// Build an application rooted at `base_path` with an explicit config.
    pub fn new(base_path: impl Into<PathBuf>, config: AppConfig) -> Self {
        // Collecting components drops trailing separators.
        let base_path: PathBuf = base_path.into().components().collect();

        Self {
            base_path,
            config,
            router: Router::new(),
        }
    }

    /// Build an application rooted at `base_path`, reading
    /// `<base_path>/config/app.toml` when it exists.
    pub fn load(base_path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let mut app = Self::new(base_path, AppConfig::default());
        app.config = load_config_dir(&app.config_path())?;
        Ok(app)
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn config_path(&self) -> PathBuf {
        self.base_path.join("config")
    }

    pub fn public_path(&self) -> PathBuf {
        self.base_path.join("public")
    }

    pub fn src_path(&self) -> PathBuf {
        self.base_path.join("src")
    }

    pub fn environment(&self) -> &str {
        &self.config.env
    }

    pub fn is_environment(&self, env: &str) -> bool {
        self.config.env == env
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut AppConfig {
        &mut self.config
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut Router {
        &mut self.router
    }

    /// Let `provider` register its routes.
    pub fn register<P: RouteProvider + ?Sized>(&mut self, provider: &P) -> &mut Self {
        provider.register(&mut self.router);
        self
    }

    /// Freeze the router and build the HTTP server.
    pub fn into_server(self) -> HttpServer {
        HttpServer::new(Arc::new(self.router), self.config)
    }

    /// Bind the configured address and serve until `shutdown` fires.
    pub async fn run(self, shutdown: ShutdownSignal) -> Result<(), ServeError> {
        let address = self.config.server.bind_address();

        if self.config.observability.metrics_enabled {
            match self.config.observability.metrics_address.parse() {
                Ok(addr) => {
                    if let Err(e) = metrics::init_metrics(addr) {
                        tracing::error!(error = %e, "Failed to start metrics exporter");
                    }
                }
                Err(_) => tracing::error!(
                    metrics_address = %self.config.observability.metrics_address,
                    "Failed to parse metrics address"
                ),
            }
        }

        let listener = TcpListener::bind(&address)
            .await
            .map_err(|source| ServeError::Bind {
                address: address.clone(),
                source,
            })?;

        tracing::info!(
            address = %address,
            routes = self.router.routes().count(),
            env = %self.config.env,
            "Application starting"
        );

        self.into_server().run(listener, shutdown).await?;
        Ok(())
    }
}
