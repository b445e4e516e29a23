//! Segment trie over route paths.
//!
//! # Responsibilities
//! - Store values (route ids) under the node their path pattern resolves to
//! - Resolve a concrete request path to the values registered for it
//! - Bind named parameters (`:name` segments) while walking
//!
//! # Design Decisions
//! - One node per path segment, children kept in insertion order
//! - A node may hold several values (one path, many methods)
//! - Literal children win over named children at the same depth
//! - No backtracking: a failed walk resolves to the deepest node reached
//! - Append-only; there is no removal or relocation primitive

use crate::routing::params::RouteParams;

/// A prefix tree keyed by path segments.
#[derive(Debug)]
pub struct RouteTrie<T> {
    root: TrieNode<T>,
}

#[derive(Debug)]
struct TrieNode<T> {
    /// `""` for the root, literal text, or `:name`.
    segment: String,
    is_named_param: bool,
    children: Vec<TrieNode<T>>,
    values: Vec<T>,
}

impl<T> TrieNode<T> {
    fn new(segment: &str) -> Self {
        Self {
            segment: segment.to_string(),
            is_named_param: segment.starts_with(':'),
            children: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Child whose pattern text equals `segment`, created on demand.
    fn child_or_insert(&mut self, segment: &str) -> &mut TrieNode<T> {
        let index = match self.children.iter().position(|c| c.segment == segment) {
            Some(index) => index,
            None => {
                self.children.push(TrieNode::new(segment));
                self.children.len() - 1
            }
        };
        &mut self.children[index]
    }

    /// Child that accepts the concrete request segment.
    fn find_child(&self, segment: &str) -> Option<&TrieNode<T>> {
        let literal = self
            .children
            .iter()
            .find(|c| !c.is_named_param && c.segment == segment);

        match literal {
            Some(child) => Some(child),
            None if segment.is_empty() => None,
            None => self.children.iter().find(|c| c.is_named_param),
        }
    }

    /// Parameter name of a named node (segment without the leading colon).
    fn param_name(&self) -> &str {
        &self.segment[1..]
    }
}

impl<T> RouteTrie<T> {
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(""),
        }
    }

    /// Insert `value` under `path`, creating any missing nodes.
    ///
    /// Values added under the same path are kept in insertion order.
    pub fn add(&mut self, path: &str, value: T) {
        let mut node = &mut self.root;
        for segment in segments(path) {
            node = node.child_or_insert(segment);
        }
        node.values.push(value);
    }

    /// Resolve `path` and return the values stored at the resolved node
    /// together with the bound named parameters.
    ///
    /// When no child accepts the next segment the walk stops, and the
    /// deepest node reached so far is the resolved node. An empty slice
    /// means "not found"; the params may still hold whatever was bound on
    /// the way down.
    pub fn search(&self, path: &str) -> (&[T], RouteParams) {
        let mut params = RouteParams::new();
        let mut node = &self.root;

        for segment in segments(path) {
            let Some(child) = node.find_child(segment) else {
                break;
            };
            if child.is_named_param {
                params.insert(child.param_name(), segment);
            }
            node = child;
        }

        (&node.values, params)
    }
}

impl<T> Default for RouteTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a path into segments, ignoring the leading slash. The root path
/// yields no segments.
fn segments(path: &str) -> std::str::Split<'_, char> {
    let trimmed = path.trim_start_matches('/');
    let mut parts = trimmed.split('/');
    if trimmed.is_empty() {
        parts.next();
    }
    parts
}
