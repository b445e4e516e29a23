//! Route registration and request dispatch.
//!
//! # Responsibilities
//! - Register routes per HTTP method
//! - Scope registrations under a path prefix (groups)
//! - Resolve a request to exactly one handler or the not-found handler
//!
//! # Design Decisions
//! - Registration needs `&mut self`; dispatch only `&self`, so a router
//!   shared behind `Arc` is frozen and lock-free
//! - First registered route that accepts the request wins
//! - No 405: a path match with no method match is a not-found

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;

use crate::routing::collection::{RouteCollection, RouteId};
use crate::routing::handler::{not_found, Handler};
use crate::routing::path::clean_path;
use crate::routing::route::Route;

/// Methods registered by [`Router::any`].
pub const ANY_METHODS: [&str; 5] = ["GET", "POST", "PUT", "PATCH", "DELETE"];

/// Dispatch front end over a [`RouteCollection`].
pub struct Router {
    routes: RouteCollection,
    not_found: Arc<dyn Handler>,
}

impl Router {
    pub fn new() -> Self {
        Self::from_collection(RouteCollection::new())
    }

    /// Wrap an already populated collection.
    pub fn from_collection(routes: RouteCollection) -> Self {
        Self {
            routes,
            not_found: Arc::new(not_found),
        }
    }

    pub fn routes(&self) -> &RouteCollection {
        &self.routes
    }

    pub fn routes_mut(&mut self) -> &mut RouteCollection {
        &mut self.routes
    }

    pub fn into_routes(self) -> RouteCollection {
        self.routes
    }

    /// Register a prebuilt route.
    pub fn add(&mut self, route: Route) -> RouteId {
        tracing::debug!(
            path = %route.path(),
            methods = ?route.methods(),
            name = %route.name(),
            "Route registered"
        );
        self.routes.add(route)
    }

    pub fn get<H: Handler>(&mut self, path: &str, handler: H) -> RouteId {
        self.match_methods(&["GET"], path, handler)
    }

    pub fn post<H: Handler>(&mut self, path: &str, handler: H) -> RouteId {
        self.match_methods(&["POST"], path, handler)
    }

    pub fn put<H: Handler>(&mut self, path: &str, handler: H) -> RouteId {
        self.match_methods(&["PUT"], path, handler)
    }

    pub fn patch<H: Handler>(&mut self, path: &str, handler: H) -> RouteId {
        self.match_methods(&["PATCH"], path, handler)
    }

    pub fn delete<H: Handler>(&mut self, path: &str, handler: H) -> RouteId {
        self.match_methods(&["DELETE"], path, handler)
    }

    /// Register one route answering all of [`ANY_METHODS`].
    pub fn any<H: Handler>(&mut self, path: &str, handler: H) -> RouteId {
        self.match_methods(&ANY_METHODS, path, handler)
    }

    /// Register one route restricted to `methods`.
    pub fn match_methods<H: Handler>(&mut self, methods: &[&str], path: &str, handler: H) -> RouteId {
        self.add(Route::new(path, methods, handler))
    }

    /// Register routes under `prefix`.
    ///
    /// `build` receives a complete router bound to a fresh collection, so it
    /// can register, name and nest groups exactly like at the top level.
    /// Its routes are then prefixed and merged into this router.
    ///
    /// The not-found handler is router-wide: one set inside `build` replaces
    /// this router's not-found handler.
    ///
    /// ```
    /// use axum::body::Body;
    /// use axum::http::Request;
    /// use trellis::routing::Router;
    ///
    /// async fn users(_req: Request<Body>) -> &'static str {
    ///     "users"
    /// }
    ///
    /// let mut router = Router::new();
    /// router.group("/api", |api| {
    ///     api.get("/users", users);
    ///     api.group("/v2", |v2| {
    ///         v2.get("/users", users);
    ///     });
    /// });
    ///
    /// assert!(router.routes().routes_by_path("/api/v2/users").is_some());
    /// ```
    pub fn group<F>(&mut self, prefix: &str, build: F)
    where
        F: FnOnce(&mut Router),
    {
        let mut scoped = Router {
            routes: RouteCollection::new(),
            not_found: Arc::clone(&self.not_found),
        };
        build(&mut scoped);

        if !Arc::ptr_eq(&scoped.not_found, &self.not_found) {
            self.not_found = scoped.not_found;
        }

        let mut routes = scoped.routes;
        routes.prefix(prefix);

        tracing::debug!(prefix = %prefix, count = routes.count(), "Route group merged");
        self.routes.add_collection(routes);
    }

    /// Replace the handler used when no route accepts a request.
    pub fn set_not_found_handler<H: Handler>(&mut self, handler: H) {
        self.not_found = Arc::new(handler);
    }

    pub fn route_by_name(&self, name: &str) -> Option<&Route> {
        self.routes.route_by_name(name)
    }

    pub fn refresh_named_routes(&mut self) {
        self.routes.refresh_named_routes();
    }

    /// Resolve `request` and run the chosen handler.
    ///
    /// The request path is cleaned before lookup. A path deeper than any
    /// registered pattern resolves to the deepest node the trie walk
    /// reaches, so `/docs/intro/extra` is served by `/docs/intro` when no
    /// longer pattern accepts it. Candidates are tried in
    /// registration order and the first whose matchers all pass handles the
    /// request, with its [`RouteParams`](crate::routing::RouteParams) in the
    /// request extensions. Anything else goes to the not-found handler.
    pub async fn dispatch(&self, mut request: Request<Body>) -> Response {
        let path = clean_path(request.uri().path()).into_owned();

        let handler = match self.routes.routes_by_path(&path) {
            Some(group) => match group.routes.into_iter().find(|r| r.matches(&request)) {
                Some(route) => {
                    tracing::debug!(
                        method = %request.method(),
                        path = %path,
                        route = %route.path(),
                        "Route matched"
                    );
                    request.extensions_mut().insert(group.params);
                    Arc::clone(route.handler())
                }
                None => {
                    tracing::debug!(method = %request.method(), path = %path, "No route accepts method");
                    Arc::clone(&self.not_found)
                }
            },
            None => {
                tracing::debug!(method = %request.method(), path = %path, "No route matched");
                Arc::clone(&self.not_found)
            }
        };

        handler.call(request).await
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes)
            .finish_non_exhaustive()
    }
}
