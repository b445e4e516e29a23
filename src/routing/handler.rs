//! Request handlers.

use std::future::Future;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use futures_util::future::BoxFuture;

/// Body written by the default not-found handler.
pub const NOT_FOUND_BODY: &str = "404 page not found";

/// An endpoint capable of answering a request.
///
/// Implemented for every `Fn(Request<Body>) -> impl Future<Output = impl IntoResponse>`,
/// so plain async functions and async closures can be registered directly.
pub trait Handler: Send + Sync + 'static {
    fn call(&self, request: Request<Body>) -> BoxFuture<'static, Response>;
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + 'static,
{
    fn call(&self, request: Request<Body>) -> BoxFuture<'static, Response> {
        let fut = (self)(request);
        Box::pin(async move { fut.await.into_response() })
    }
}

/// Default fallback used when no route answers a request.
pub async fn not_found(_request: Request<Body>) -> Response {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
}
