//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use trellis::config::AppConfig;
use trellis::http::HttpServer;
use trellis::lifecycle::Shutdown;
use trellis::routing::Router;

/// A server running on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Arc<Shutdown>,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger shutdown and wait for the server task to finish.
    #[allow(dead_code)]
    pub async fn stop(self) {
        self.shutdown.trigger();
        self.handle.await.unwrap().unwrap();
    }
}

/// Serve `router` on 127.0.0.1 with an OS-assigned port.
pub async fn spawn_server(router: Router) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Arc::new(Shutdown::new());
    let server = HttpServer::new(Arc::new(router), AppConfig::default());
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    TestServer {
        addr,
        shutdown,
        handle,
    }
}
