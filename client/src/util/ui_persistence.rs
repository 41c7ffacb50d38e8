//! Browser `localStorage` persistence for client-side storefront state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The cart and cookie consent survive reloads through these helpers. Off the
//! browser every load is `None` and every write is dropped, so state modules
//! can call them unconditionally.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load the JSON value stored under `key`. Missing or undecodable entries
/// read as `None`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(key).ok().flatten()?;
        decode(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store `value` as JSON under `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Some(raw) = encode(value) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, &raw);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, raw);
    }
}

pub fn remove_key(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn decode<T: DeserializeOwned>(raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            leptos::logging::warn!("discarding unreadable stored state: {err}");
            None
        }
    }
}

fn encode<T: Serialize>(value: &T) -> Option<String> {
    serde_json::to_string(value).ok()
}
