//! Request identification.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) for every inbound request
//! - Keep a client-supplied `x-request-id` when present
//! - Echo the ID on the response
//!
//! # Design Decisions
//! - Request ID added as early as possible, before tracing spans open
//! - Built on tower-http's request-id layers; only the generator is ours

use axum::http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Layer that assigns an ID to requests that lack one.
pub fn set_request_id_layer() -> SetRequestIdLayer<UuidRequestId> {
    SetRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID), UuidRequestId)
}

/// Layer that copies the request ID onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID))
}

/// Access to the request ID of a request.
pub trait RequestIdExt {
    /// The request ID, or `None` if no ID layer ran.
    fn request_id(&self) -> Option<&str>;
}

impl<B> RequestIdExt for Request<B> {
    fn request_id(&self) -> Option<&str> {
        self.headers()
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_generated_ids_are_unique_uuids() {
        let request = Request::new(Body::empty());
        let mut maker = UuidRequestId;

        let a = maker.make_request_id(&request).unwrap();
        let b = maker.make_request_id(&request).unwrap();

        let a = a.header_value().to_str().unwrap();
        let b = b.header_value().to_str().unwrap();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a).is_ok());
    }

    #[test]
    fn test_request_id_ext() {
        let request = Request::builder()
            .header(X_REQUEST_ID, "abc-123")
            .body(Body::empty())
            .unwrap();
        assert_eq!(request.request_id(), Some("abc-123"));

        assert_eq!(Request::new(Body::empty()).request_id(), None);
    }
}
