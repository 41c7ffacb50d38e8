//! Navigation state carried across guard redirects.
//!
//! The record is attached to the redirect target: only the route at `at`
//! sees `from`. Any later redirect overwrites it.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use super::guard::Redirect;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Pathname the last redirect went to.
    pub at: Option<String>,
    pub from: Option<String>,
}

impl NavigationState {
    pub fn record(&mut self, redirect: &Redirect) {
        self.at = Some(pathname(&redirect.to).to_owned());
        self.from.clone_from(&redirect.from);
    }

    /// The carried `from`, if the last redirect targeted `path`.
    pub fn from_for(&self, path: &str) -> Option<&str> {
        let at = self.at.as_deref()?;
        (trim_trailing(at) == trim_trailing(pathname(path))).then_some(self.from.as_deref()).flatten()
    }
}

/// Full attempted path: pathname plus the query string, if any.
///
/// `search` may be given with or without its leading `?`.
pub fn attempted_path(pathname: &str, search: &str) -> String {
    let query = search.strip_prefix('?').unwrap_or(search);
    if query.is_empty() { pathname.to_owned() } else { format!("{pathname}?{query}") }
}

fn pathname(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or_default()
}

fn trim_trailing(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
