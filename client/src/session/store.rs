//! Persistent credential storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session manager persists the auth token through [`SessionStore`] so a
//! reload can restore the session. In the browser this is a single cookie; in
//! tests and non-browser embeddings it is [`MemoryStore`].
//!
//! ERROR HANDLING
//! ==============
//! Storage failures are swallowed. A read that fails behaves like an absent
//! token, so the visitor is treated as signed out rather than stuck.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, Mutex, PoisonError};

/// Cookie name holding the persisted auth token.
pub const TOKEN_COOKIE: &str = "paperbook_token";

const SECONDS_PER_DAY: u64 = 86_400;

/// Key-value capability for the persisted auth token.
pub trait SessionStore {
    /// The persisted token, or `None` when missing, expired, or unreadable.
    fn read_token(&self) -> Option<String>;

    /// Persist `token` for `expires_in_days` days.
    fn write_token(&self, token: &str, expires_in_days: u32);

    fn clear_token(&self);
}

// =============================================================================
// COOKIE STORE
// =============================================================================

/// Browser cookie store. Every operation is a no-op off the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieStore {
    name: String,
}

impl Default for CookieStore {
    fn default() -> Self {
        Self::new(TOKEN_COOKIE)
    }
}

impl CookieStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

impl SessionStore for CookieStore {
    fn read_token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let header = html_document()?.cookie().ok()?;
            find_cookie(&header, &self.name)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn write_token(&self, token: &str, expires_in_days: u32) {
        let Some(cookie) = format_cookie(&self.name, token, expires_in_days) else {
            leptos::logging::warn!("token is not cookie-safe; not persisted");
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            if let Some(doc) = html_document() {
                let _ = doc.set_cookie(&cookie);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = cookie;
        }
    }

    fn clear_token(&self) {
        let cookie = clear_cookie(&self.name);
        #[cfg(feature = "hydrate")]
        {
            if let Some(doc) = html_document() {
                let _ = doc.set_cookie(&cookie);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = cookie;
        }
    }
}

/// Whether `value` can be stored in a cookie without encoding.
pub fn is_cookie_safe(value: &str) -> bool {
    !value.is_empty()
        && value
            .bytes()
            .all(|b| b.is_ascii_graphic() && !matches!(b, b';' | b',' | b'"' | b'\\'))
}

/// Build the `Set-Cookie`-style assignment for a persisted token.
///
/// Returns `None` when the token is not cookie-safe.
pub fn format_cookie(name: &str, value: &str, expires_in_days: u32) -> Option<String> {
    if !is_cookie_safe(value) {
        return None;
    }
    let max_age = u64::from(expires_in_days) * SECONDS_PER_DAY;
    Some(format!("{name}={value}; Max-Age={max_age}; Path=/; SameSite=Lax"))
}

/// Assignment that expires the cookie immediately.
pub fn clear_cookie(name: &str) -> String {
    format!("{name}=; Max-Age=0; Path=/; SameSite=Lax")
}

/// Find `name` in a `document.cookie` header (`a=1; b=2`).
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name && !value.is_empty()).then(|| value.to_owned())
    })
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// A token entry as written to [`MemoryStore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredToken {
    pub token: String,
    pub expires_in_days: u32,
}

#[derive(Debug, Default)]
struct MemoryInner {
    entry: Option<StoredToken>,
    expired: bool,
}

/// In-process store. Clones share the same entry.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store already holding `token`.
    pub fn with_token(token: &str, expires_in_days: u32) -> Self {
        let store = Self::new();
        store.write_token(token, expires_in_days);
        store
    }

    /// The raw entry, including its lifetime, regardless of expiry.
    pub fn entry(&self) -> Option<StoredToken> {
        self.lock().entry.clone()
    }

    /// Simulate the entry's lifetime running out.
    pub fn expire(&self) {
        self.lock().expired = true;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for MemoryStore {
    fn read_token(&self) -> Option<String> {
        let inner = self.lock();
        if inner.expired {
            return None;
        }
        inner.entry.as_ref().map(|entry| entry.token.clone())
    }

    fn write_token(&self, token: &str, expires_in_days: u32) {
        let mut inner = self.lock();
        inner.entry = Some(StoredToken { token: token.to_owned(), expires_in_days });
        inner.expired = false;
    }

    fn clear_token(&self) {
        let mut inner = self.lock();
        inner.entry = None;
        inner.expired = false;
    }
}
