//! A single registered endpoint.

use std::fmt;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;

use crate::routing::handler::Handler;
use crate::routing::matcher::{Matcher, MethodMatcher};
use crate::routing::path::normalize_path;

/// Method used when a route is built without any.
pub const DEFAULT_METHOD: &str = "GET";

/// An endpoint: normalized path pattern, allowed methods, optional name,
/// handler and the matchers a request must pass.
///
/// Setters are provided for parity with the registration API, but a route
/// that has already been added to a [`RouteCollection`](crate::routing::RouteCollection)
/// stays in the trie under the path it had when it was added. Changing
/// the path of a registered route therefore leaves it unreachable under the
/// new path until the collection is rebuilt (see `RouteCollection::prefix`).
#[derive(Clone)]
pub struct Route {
    path: String,
    methods: Vec<String>,
    name: String,
    handler: Arc<dyn Handler>,
    matchers: Vec<Arc<dyn Matcher>>,
}

impl Route {
    /// Build a route. An empty method list means `GET`.
    pub fn new<H: Handler>(path: &str, methods: &[&str], handler: H) -> Self {
        Self::from_shared(path, methods, Arc::new(handler))
    }

    /// Build a route around a handler that is already shared.
    pub fn from_shared(path: &str, methods: &[&str], handler: Arc<dyn Handler>) -> Self {
        let mut route = Self {
            path: String::new(),
            methods: Vec::new(),
            name: String::new(),
            handler,
            matchers: vec![Arc::new(MethodMatcher)],
        };
        route.set_path(path);
        route.set_methods(methods);
        route
    }

    /// Builder form of [`Route::set_name`].
    pub fn with_name(mut self, name: &str) -> Self {
        self.set_name(name);
        self
    }

    /// Builder form of [`Route::add_matcher`].
    pub fn with_matcher<M: Matcher + 'static>(mut self, matcher: M) -> Self {
        self.add_matcher(matcher);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn set_path(&mut self, path: &str) {
        self.path = normalize_path(path);
    }

    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// Replace the method set. Tokens are upper-cased and de-duplicated;
    /// they are not checked against any list of known methods.
    pub fn set_methods(&mut self, methods: &[&str]) {
        let mut formatted: Vec<String> = Vec::with_capacity(methods.len().max(1));
        for method in methods {
            let method = method.trim().to_uppercase();
            if !method.is_empty() && !formatted.contains(&method) {
                formatted.push(method);
            }
        }

        if formatted.is_empty() {
            formatted.push(DEFAULT_METHOD.to_string());
        }

        self.methods = formatted;
    }

    /// True if `method` (already upper-cased) is one of this route's methods.
    pub fn allows_method(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m == method)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names are trimmed and lower-cased. An empty name unnames the route.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.trim().to_lowercase();
    }

    pub fn handler(&self) -> &Arc<dyn Handler> {
        &self.handler
    }

    pub fn matchers(&self) -> &[Arc<dyn Matcher>] {
        &self.matchers
    }

    /// Append a matcher. The method matcher always stays first.
    pub fn add_matcher<M: Matcher + 'static>(&mut self, matcher: M) {
        self.matchers.push(Arc::new(matcher));
    }

    /// True if every matcher accepts the request.
    pub fn matches(&self, req: &Request<Body>) -> bool {
        self.matchers.iter().all(|m| m.matches(self, req))
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("methods", &self.methods)
            .field("name", &self.name)
            .field("matchers", &self.matchers)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::matcher::matcher_fn;
    use axum::http::Method;

    async fn ok(_req: Request<Body>) -> &'static str {
        "ok"
    }

    fn request(method: Method) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri("/")
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_new_route_normalizes_inputs() {
        let route = Route::new("/path/to/route", &["get", "post"], ok);

        assert_eq!(route.path(), "/path/to/route");
        assert_eq!(route.methods(), ["GET", "POST"]);
        assert_eq!(route.name(), "");
    }

    #[test]
    fn test_methods_default_to_get() {
        let route = Route::new("", &[], ok);

        assert_eq!(route.path(), "/");
        assert_eq!(route.methods(), ["GET"]);
    }

    #[test]
    fn test_path_is_formatted_when_set() {
        let mut route = Route::new("   ////path/to/route", &[], ok);
        assert_eq!(route.path(), "/path/to/route");

        route.set_path("path/to/route");
        assert_eq!(route.path(), "/path/to/route");

        route.set_path("test/");
        assert_eq!(route.path(), "/test");

        route.set_path("");
        assert_eq!(route.path(), "/");
    }

    #[test]
    fn test_methods_are_uppercased_and_deduplicated() {
        let mut route = Route::new("/", &[], ok);

        route.set_methods(&["get", "head", "post", "PUT", "PATCH", "DELETE", "Get"]);
        assert_eq!(
            route.methods(),
            ["GET", "HEAD", "POST", "PUT", "PATCH", "DELETE"]
        );
    }

    #[test]
    fn test_name_is_normalized() {
        let route = Route::new("/", &[], ok).with_name(" HoMe ");
        assert_eq!(route.name(), "home");
    }

    #[test]
    fn test_method_matcher_is_set_by_default() {
        let route = Route::new("/test", &["GET"], ok);

        assert_eq!(route.matchers().len(), 1);
        assert!(route.matches(&request(Method::GET)));
        assert!(!route.matches(&request(Method::POST)));
    }

    #[test]
    fn test_all_matchers_must_pass() {
        let route = Route::new("/test", &["GET"], ok).with_matcher(matcher_fn(
            |_route: &Route, req: &Request<Body>| req.headers().contains_key("x-tenant"),
        ));

        assert!(!route.matches(&request(Method::GET)));

        let tenant = Request::builder()
            .uri("/")
            .header("x-tenant", "acme")
            .body(Body::empty())
            .unwrap();
        assert!(route.matches(&tenant));

        let wrong_method = Request::builder()
            .method(Method::POST)
            .uri("/")
            .header("x-tenant", "acme")
            .body(Body::empty())
            .unwrap();
        assert!(!route.matches(&wrong_method));
    }
}
