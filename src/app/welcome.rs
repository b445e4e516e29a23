//! Default routes served by a fresh application.

use axum::body::Body;
use axum::http::Request;

use crate::app::RouteProvider;
use crate::routing::{Route, Router};

/// Registers a `GET /` route named `welcome`.
#[derive(Debug, Clone)]
pub struct WelcomeRoutes {
    message: String,
}

impl WelcomeRoutes {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for WelcomeRoutes {
    fn default() -> Self {
        Self::new("Welcome to trellis!")
    }
}

impl RouteProvider for WelcomeRoutes {
    fn register(&self, router: &mut Router) {
        let message = self.message.clone();
        let route = Route::new("/", &["GET"], move |_req: Request<Body>| {
            let message = message.clone();
            async move { message }
        })
        .with_name("welcome");

        router.add(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_welcome_route_serves_message() {
        let mut router = Router::new();
        WelcomeRoutes::new("hello there").register(&mut router);

        assert!(router.route_by_name("welcome").is_some());

        let request = Request::get("/").body(Body::empty()).unwrap();
        let response = router.dispatch(request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"hello there");
    }
}
