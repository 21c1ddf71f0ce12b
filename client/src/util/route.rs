//! Route matching for navigation highlighting.
//!
//! POLICY
//! ======
//! - `/` is active only for the exact root path.
//! - Any other href is active for the same path or for a descendant path at
//!   a segment boundary (`/applications` covers `/applications/7/edit`, not
//!   `/applicationsx`).
//! - Trailing slashes, query strings, and fragments are ignored.
//! - When several hrefs match, the longest one wins so at most one entry is
//!   ever active.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// Strip query/fragment and trailing slashes; empty input becomes `/`.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Whether a navigation entry pointing at `href` is active for `pathname`.
pub fn is_active(href: &str, pathname: &str) -> bool {
    let href = normalize_path(href);
    let path = normalize_path(pathname);
    if href == "/" {
        return path == "/";
    }
    path == href || path.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

/// Index of the single active href in `hrefs`, if any.
pub fn active_index<'a>(hrefs: impl IntoIterator<Item = &'a str>, pathname: &str) -> Option<usize> {
    hrefs
        .into_iter()
        .enumerate()
        .filter(|(_, href)| is_active(href, pathname))
        .max_by_key(|(_, href)| normalize_path(href).len())
        .map(|(index, _)| index)
}
