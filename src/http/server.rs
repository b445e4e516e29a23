//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum app that feeds every request into the routing engine
//! - Wire up middleware (request ID, tracing, timeout)
//! - Bind server to listener and shut down gracefully
//! - Record request metrics

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, RequestIdExt};
use crate::lifecycle::ShutdownSignal;
use crate::observability::metrics;
use crate::routing::Router;

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<Router>,
}

/// HTTP front end for a frozen [`Router`].
pub struct HttpServer {
    app: axum::Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server serving `router`.
    pub fn new(router: Arc<Router>, config: AppConfig) -> Self {
        metrics::record_route_count(router.routes().count());

        let state = AppState { router };
        let app = Self::build_app(&config, state);
        Self { app, config }
    }

    /// Build the Axum app with all middleware layers.
    #[allow(deprecated)]
    fn build_app(config: &AppConfig, state: AppState) -> axum::Router {
        axum::Router::new()
            .fallback(dispatch_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = request.request_id().unwrap_or("-"),
                    )
                }),
            )
            .layer(set_request_id_layer())
    }

    /// The Axum app, for serving elsewhere or driving in tests.
    pub fn app(&self) -> axum::Router {
        self.app.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(self, listener: TcpListener, mut shutdown: ShutdownSignal) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            env = %self.config.env,
            "HTTP server starting"
        );

        axum::serve(listener, self.app)
            .with_graceful_shutdown(async move { shutdown.recv().await })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Hands every request to the routing engine.
async fn dispatch_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();

    let response = state.router.dispatch(request).await;

    metrics::record_request(&method, response.status().as_u16(), start);
    response
}
