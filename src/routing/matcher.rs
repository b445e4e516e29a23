//! Route matching predicates.
//!
//! # Responsibilities
//! - Decide whether a path-matched route accepts a request
//! - Match the request method against the route's method set
//! - Allow custom predicates to be attached per route
//!
//! # Design Decisions
//! - Matchers are trait objects so applications can add their own
//! - A route accepts a request only if every matcher passes (AND)
//! - Matchers hold no mutable state; dispatch calls them concurrently

use std::fmt;

use axum::body::Body;
use axum::http::Request;

use crate::routing::route::Route;

/// Trait for matching requests against a route's conditions.
pub trait Matcher: Send + Sync + fmt::Debug {
    /// Returns true if `route` accepts `req`.
    fn matches(&self, route: &Route, req: &Request<Body>) -> bool;
}

/// Matches the request method against the route's allowed methods.
///
/// Route methods are already upper-cased, and `http::Method` renders
/// standard methods upper-cased, so this is a plain string comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodMatcher;

impl Matcher for MethodMatcher {
    fn matches(&self, route: &Route, req: &Request<Body>) -> bool {
        route.allows_method(req.method().as_str())
    }
}

/// Adapter that lets an ordinary function act as a [`Matcher`].
pub struct MatcherFn<F> {
    f: F,
}

/// Wrap `f` as a [`Matcher`].
pub fn matcher_fn<F>(f: F) -> MatcherFn<F>
where
    F: Fn(&Route, &Request<Body>) -> bool + Send + Sync,
{
    MatcherFn { f }
}

impl<F> Matcher for MatcherFn<F>
where
    F: Fn(&Route, &Request<Body>) -> bool + Send + Sync,
{
    fn matches(&self, route: &Route, req: &Request<Body>) -> bool {
        (self.f)(route, req)
    }
}

impl<F> fmt::Debug for MatcherFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatcherFn").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Method;

    fn request(method: Method) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri("/")
            .body(Body::empty())
            .unwrap()
    }

    fn ok(_req: Request<Body>) -> std::future::Ready<&'static str> {
        std::future::ready("ok")
    }

    #[test]
    fn test_method_matcher() {
        let route = Route::new("/test", &["get", "post"], ok);

        assert!(MethodMatcher.matches(&route, &request(Method::GET)));
        assert!(MethodMatcher.matches(&route, &request(Method::POST)));
        assert!(!MethodMatcher.matches(&route, &request(Method::DELETE)));
    }

    #[test]
    fn test_method_matcher_custom_token() {
        let route = Route::new("/test", &["purge"], ok);
        let method = Method::from_bytes(b"PURGE").unwrap();

        assert!(MethodMatcher.matches(&route, &request(method)));
        assert!(!MethodMatcher.matches(&route, &request(Method::GET)));
    }

    #[test]
    fn test_matcher_fn() {
        let route = Route::new("/test", &[], ok);
        let has_header = matcher_fn(|_route: &Route, req: &Request<Body>| {
            req.headers().contains_key("x-api-key")
        });

        let with_header = Request::builder()
            .uri("/")
            .header("x-api-key", "secret")
            .body(Body::empty())
            .unwrap();
        assert!(has_header.matches(&route, &with_header));
        assert!(!has_header.matches(&route, &request(Method::GET)));
    }
}
