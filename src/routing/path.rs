//! Path normalization.
//!
//! Two flavours exist because registration and dispatch want different
//! things: route patterns are only tidied (`normalize_path`), while request
//! paths are fully resolved (`clean_path`) so that `.` and `..` segments
//! cannot reach a route through a back door.

use std::borrow::Cow;

/// Normalize a route pattern.
///
/// Trims surrounding whitespace, forces exactly one leading slash, collapses
/// duplicate slashes and drops any trailing slash. The empty string becomes
/// the root `/`. This never fails.
pub fn normalize_path(path: &str) -> String {
    let mut normalized = String::with_capacity(path.len() + 1);

    for segment in path.trim().split('/').filter(|s| !s.is_empty()) {
        normalized.push('/');
        normalized.push_str(segment);
    }

    if normalized.is_empty() {
        normalized.push('/');
    }

    normalized
}

/// Clean a request path using lexical path-cleaning rules.
///
/// - duplicate slashes are collapsed
/// - `.` segments are removed
/// - `..` removes the previous segment (never climbing above the root)
/// - the trailing slash is removed, except for the root
///
/// Paths that are already clean are returned borrowed.
pub fn clean_path(path: &str) -> Cow<'_, str> {
    if is_clean(path) {
        return Cow::Borrowed(path);
    }

    let mut stack: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            other => stack.push(other),
        }
    }

    if stack.is_empty() {
        return Cow::Borrowed("/");
    }

    Cow::Owned(format!("/{}", stack.join("/")))
}

fn is_clean(path: &str) -> bool {
    if path == "/" {
        return true;
    }

    match path.strip_prefix('/') {
        Some(rest) => rest
            .split('/')
            .all(|segment| !matches!(segment, "" | "." | "..")),
        None => false,
    }
}
