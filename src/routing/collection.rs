//! Route storage and indexes.
//!
//! # Responsibilities
//! - Own every registered route in registration order
//! - Index routes by path (trie) and by name
//! - Support grouping: prefixing and merging collections
//!
//! # Design Decisions
//! - Routes live in one `Vec`; the trie and the name index hold `RouteId`s
//! - The name index is only rebuilt on demand (`refresh_named_routes`)
//! - Prefixing rebuilds the trie from scratch; registration happens once

use std::collections::HashMap;

use crate::routing::params::RouteParams;
use crate::routing::route::Route;
use crate::routing::trie::RouteTrie;

/// Position of a route inside its [`RouteCollection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteId(usize);

impl RouteId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Routes found for a path, in registration order, plus the bound params.
#[derive(Debug)]
pub struct RouteMatchGroup<'a> {
    pub routes: Vec<&'a Route>,
    pub params: RouteParams,
}

/// An indexed set of routes.
#[derive(Debug, Default)]
pub struct RouteCollection {
    trie: RouteTrie<RouteId>,
    all_routes: Vec<Route>,
    named_routes: HashMap<String, RouteId>,
}

impl RouteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route. Named routes are also indexed by name; a later route
    /// with the same name replaces the earlier one in the index.
    pub fn add(&mut self, route: Route) -> RouteId {
        let id = RouteId(self.all_routes.len());

        if !route.name().is_empty() {
            self.named_routes.insert(route.name().to_string(), id);
        }

        self.trie.add(route.path(), id);
        self.all_routes.push(route);
        id
    }

    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.all_routes.get(id.0)
    }

    /// Mutable access to a registered route.
    ///
    /// Renames only reach the name index after `refresh_named_routes`; path
    /// changes never reach the trie.
    pub fn route_mut(&mut self, id: RouteId) -> Option<&mut Route> {
        self.all_routes.get_mut(id.0)
    }

    /// Look up a route by name. The empty name never matches.
    pub fn route_by_name(&self, name: &str) -> Option<&Route> {
        if name.is_empty() {
            return None;
        }

        self.named_routes
            .get(name)
            .and_then(|id| self.all_routes.get(id.0))
    }

    /// Routes registered for `path`, or `None` when nothing resolves.
    pub fn routes_by_path(&self, path: &str) -> Option<RouteMatchGroup<'_>> {
        let (ids, params) = self.trie.search(path);
        if ids.is_empty() {
            return None;
        }

        let routes = ids.iter().filter_map(|id| self.all_routes.get(id.0)).collect();
        Some(RouteMatchGroup { routes, params })
    }

    /// Rebuild the name index from all routes.
    pub fn refresh_named_routes(&mut self) {
        self.named_routes.clear();

        for (index, route) in self.all_routes.iter().enumerate() {
            if !route.name().is_empty() {
                self.named_routes.insert(route.name().to_string(), RouteId(index));
            }
        }
    }

    /// Prepend `prefix` to every route path and rebuild the trie.
    pub fn prefix(&mut self, prefix: &str) {
        if prefix.is_empty() {
            return;
        }

        self.trie = RouteTrie::new();

        for (index, route) in self.all_routes.iter_mut().enumerate() {
            let prefixed = format!("{}{}", prefix, route.path());
            route.set_path(&prefixed);
            self.trie.add(route.path(), RouteId(index));
        }
    }

    /// Move every route of `other` into this collection.
    pub fn add_collection(&mut self, other: RouteCollection) {
        for route in other.all_routes {
            self.add(route);
        }
    }

    /// True if a route with the same path and method set is registered.
    pub fn has(&self, route: &Route) -> bool {
        self.all_routes.iter().any(|r| {
            r.path() == route.path()
                && r.methods().len() == route.methods().len()
                && r.methods().iter().all(|m| route.allows_method(m))
        })
    }

    pub fn all_routes(&self) -> &[Route] {
        &self.all_routes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.all_routes.iter()
    }

    pub fn count(&self) -> usize {
        self.all_routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_routes.is_empty()
    }
}

impl<'a> IntoIterator for &'a RouteCollection {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;

    async fn ok(_req: Request<Body>) -> &'static str {
        "ok"
    }

    fn route(path: &str) -> Route {
        Route::new(path, &[], ok)
    }

    #[test]
    fn test_added_route_is_found_by_path() {
        let mut rc = RouteCollection::new();
        rc.add(route("/users/:id").with_name("user"));

        let group = rc.routes_by_path("/users/42").unwrap();
        assert_eq!(group.routes.len(), 1);
        assert_eq!(group.routes[0].name(), "user");
        assert_eq!(group.params.get("id"), Some("42"));
    }

    #[test]
    fn test_missing_path_is_none() {
        let mut rc = RouteCollection::new();
        rc.add(route("/a/b"));

        assert!(rc.routes_by_path("/a").is_none());
        assert!(rc.routes_by_path("/c").is_none());
    }

    #[test]
    fn test_named_route_is_indexed() {
        let mut rc = RouteCollection::new();
        rc.add(route("/").with_name("home"));
        rc.add(route("/test"));

        assert_eq!(rc.route_by_name("home").map(Route::path), Some("/"));
        assert!(rc.route_by_name("").is_none());
        assert!(rc.route_by_name("missing").is_none());
        assert_eq!(rc.count(), 2);
    }

    #[test]
    fn test_last_registration_wins_for_duplicate_names() {
        let mut rc = RouteCollection::new();
        rc.add(route("/first").with_name("dup"));
        rc.add(route("/second").with_name("dup"));

        assert_eq!(rc.route_by_name("dup").map(Route::path), Some("/second"));
    }

    #[test]
    fn test_rename_requires_refresh() {
        let mut rc = RouteCollection::new();
        let id = rc.add(route("/").with_name("old"));

        rc.route_mut(id).unwrap().set_name("new");
        assert!(rc.route_by_name("new").is_none());
        assert!(rc.route_by_name("old").is_some());

        rc.refresh_named_routes();
        assert_eq!(rc.route_by_name("new").map(Route::path), Some("/"));
        assert!(rc.route_by_name("old").is_none());
    }

    #[test]
    fn test_naming_after_registration() {
        let mut rc = RouteCollection::new();
        let id = rc.add(route("/"));
        assert!(rc.route_by_name("home").is_none());

        rc.route_mut(id).unwrap().set_name("Home");
        rc.refresh_named_routes();
        assert!(rc.route_by_name("home").is_some());
    }

    #[test]
    fn test_path_change_after_registration_does_not_move_route() {
        let mut rc = RouteCollection::new();
        let id = rc.add(route("/old"));

        rc.route_mut(id).unwrap().set_path("/new");
        assert!(rc.routes_by_path("/new").is_none());
        assert_eq!(rc.routes_by_path("/old").unwrap().routes[0].path(), "/new");
    }

    #[test]
    fn test_prefix_rewrites_paths() {
        let mut rc = RouteCollection::new();
        rc.add(route("/a"));
        rc.add(route("/b").with_name("b"));
        rc.add(route("/"));

        rc.prefix("api");

        assert!(rc.routes_by_path("/api/a").is_some());
        assert!(rc.routes_by_path("/api/b").is_some());
        assert!(rc.routes_by_path("/api").is_some());
        assert!(rc.routes_by_path("/a").is_none());
        assert!(rc.routes_by_path("/b").is_none());
        assert_eq!(rc.route_by_name("b").map(Route::path), Some("/api/b"));
    }

    #[test]
    fn test_empty_prefix_is_noop() {
        let mut rc = RouteCollection::new();
        rc.add(route("/a"));

        rc.prefix("");
        assert_eq!(rc.all_routes()[0].path(), "/a");
        assert!(rc.routes_by_path("/a").is_some());
    }

    #[test]
    fn test_add_collection_merges_routes() {
        let mut parent = RouteCollection::new();
        parent.add(route("/a"));

        let mut child = RouteCollection::new();
        child.add(route("/b").with_name("b"));
        child.add(route("/a"));

        parent.add_collection(child);

        assert_eq!(parent.count(), 3);
        assert_eq!(parent.routes_by_path("/a").unwrap().routes.len(), 2);
        assert!(parent.route_by_name("b").is_some());
    }

    #[test]
    fn test_has() {
        let mut rc = RouteCollection::new();
        let get = Route::new("", &[], ok);
        let post = Route::new("", &["POST"], ok);

        assert!(!rc.has(&get));
        rc.add(get.clone());
        assert!(rc.has(&get));

        assert!(!rc.has(&post));
        rc.add(post.clone());
        assert!(rc.has(&post));
    }

    #[test]
    fn test_named_routes_are_subset_of_all_routes() {
        let mut rc = RouteCollection::new();
        rc.add(route("/x").with_name("x"));
        rc.add(route("/y"));

        for route in &rc {
            if !route.name().is_empty() {
                assert!(rc.route_by_name(route.name()).is_some());
            }
        }
        assert_eq!(rc.iter().filter(|r| r.name().is_empty()).count(), 1);
    }
}
