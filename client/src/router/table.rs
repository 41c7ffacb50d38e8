//! Static route table.
//!
//! Matching walks [`ROUTES`] in order over `/`-separated segments and returns
//! the first match, so `/products/new` must stay ahead of `/products/:id`.
//! Anything unmatched resolves to [`NOT_FOUND`].

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Protection {
    /// Everyone.
    Public,
    /// Only visitors without a token (login, sign-up).
    AuthOnly,
    /// Only visitors with a token.
    Private,
}

/// Screen bound to a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Home,
    SignUp,
    Login,
    Search,
    NewProduct,
    Product,
    Cart,
    Identification,
    Payment,
    NotFound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub protection: Protection,
    pub view: View,
}

const fn route(path: &'static str, protection: Protection, view: View) -> RouteDescriptor {
    RouteDescriptor { path, protection, view }
}

pub const ROUTES: &[RouteDescriptor] = &[
    route("/", Protection::Public, View::Home),
    route("/signup", Protection::AuthOnly, View::SignUp),
    route("/login", Protection::AuthOnly, View::Login),
    route("/products", Protection::Public, View::Search),
    route("/products/new", Protection::Private, View::NewProduct),
    route("/products/:id", Protection::Public, View::Product),
    route("/cart", Protection::Public, View::Cart),
    route("/identification", Protection::Private, View::Identification),
    route("/payment", Protection::Private, View::Payment),
];

pub const NOT_FOUND: RouteDescriptor = route("*", Protection::Public, View::NotFound);

/// A resolved path with its captured `:param` segments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub descriptor: RouteDescriptor,
    pub params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

fn match_pattern(pattern: &'static str, path: &str) -> Option<Vec<(&'static str, String)>> {
    let mut params = Vec::new();
    let mut wanted = segments(pattern);
    let mut given = segments(path);
    loop {
        match (wanted.next(), given.next()) {
            (None, None) => return Some(params),
            (Some(want), Some(got)) => {
                if let Some(name) = want.strip_prefix(':') {
                    params.push((name, got.to_owned()));
                } else if want != got {
                    return None;
                }
            }
            _ => return None,
        }
    }
}

/// Resolve a pathname (no query string) against [`ROUTES`].
pub fn resolve(path: &str) -> RouteMatch {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    ROUTES
        .iter()
        .find_map(|descriptor| {
            match_pattern(descriptor.path, path).map(|params| RouteMatch { descriptor: *descriptor, params })
        })
        .unwrap_or(RouteMatch { descriptor: NOT_FOUND, params: Vec::new() })
}
