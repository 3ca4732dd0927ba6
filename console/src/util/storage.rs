//! Namespaced localStorage cache for console state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser localStorage is one flat namespace per origin, shared with any
//! other application served from the same host. Every key this console owns
//! is therefore stored as `radius_mgnt.<key>`, and bulk operations (`clear`,
//! `project_keys`) only ever touch that prefix.
//!
//! ERROR HANDLING
//! ==============
//! Storage is a best-effort cache. Write failures are logged and swallowed;
//! unreadable or corrupt entries read back as absent values, never errors.
//! Native (non-`csr`) builds back the same contract with a thread-local map
//! so host-side unit tests exercise every code path.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(not(feature = "csr"))]
use std::cell::RefCell;
#[cfg(not(feature = "csr"))]
use std::collections::BTreeMap;

/// Fixed prefix isolating this console's entries in shared storage.
const STORAGE_PREFIX: &str = "radius_mgnt";

/// Logical keys used by the console, mapped under [`STORAGE_PREFIX`].
pub mod keys {
    /// Raw bearer token for the active session.
    pub const AUTH_TOKEN: &str = "auth_token";
    /// JSON-encoded profile of the signed-in operator.
    pub const AUTH_USER: &str = "auth_user";
    /// Dark/light theme preference.
    pub const THEME: &str = "theme";
}

#[cfg(not(feature = "csr"))]
thread_local! {
    static NATIVE_STORE: RefCell<BTreeMap<String, String>> = RefCell::new(BTreeMap::new());
}

// The harness may run several tests on one thread; tests that assert on the
// whole store start from a clean slate.
#[cfg(all(test, not(feature = "csr")))]
fn reset_backend() {
    NATIVE_STORE.with(|store| store.borrow_mut().clear());
}

fn storage_key(key: &str) -> String {
    format!("{STORAGE_PREFIX}.{key}")
}

fn backend_get(full_key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(full_key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        NATIVE_STORE.with(|store| store.borrow().get(full_key).cloned())
    }
}

fn backend_set(full_key: &str, value: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return false;
        };
        storage.set_item(full_key, value).is_ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        NATIVE_STORE.with(|store| {
            store.borrow_mut().insert(full_key.to_owned(), value.to_owned());
        });
        true
    }
}

fn backend_remove(full_key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(full_key);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        NATIVE_STORE.with(|store| {
            store.borrow_mut().remove(full_key);
        });
    }
}

fn backend_keys() -> Vec<String> {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return Vec::new();
        };
        let len = storage.length().unwrap_or(0);
        let mut keys = Vec::new();
        for index in 0..len {
            if let Ok(Some(key)) = storage.key(index) {
                keys.push(key);
            }
        }
        keys
    }
    #[cfg(not(feature = "csr"))]
    {
        NATIVE_STORE.with(|store| store.borrow().keys().cloned().collect())
    }
}

/// Store `value` under the namespaced `key`. Failures are logged, not raised.
pub fn set_item(key: &str, value: &str) {
    if !backend_set(&storage_key(key), value) {
        leptos::logging::warn!("storage write failed for key {key}");
    }
}

/// Read the string stored under `key`, or an empty string when absent.
pub fn get_item(key: &str) -> String {
    get_item_or(key, "")
}

/// Read the string stored under `key`, or `default` when absent.
pub fn get_item_or(key: &str, default: &str) -> String {
    backend_get(&storage_key(key)).unwrap_or_else(|| default.to_owned())
}

/// Remove the entry stored under `key`.
pub fn remove_item(key: &str) {
    backend_remove(&storage_key(key));
}

/// Whether any entry (including an empty string) is stored under `key`.
pub fn has_item(key: &str) -> bool {
    backend_get(&storage_key(key)).is_some()
}

/// Serialize `value` as JSON under `key`. `None` removes the entry, which is
/// the defined way to clear a structured value.
pub fn set_json<T: Serialize>(key: &str, value: Option<&T>) {
    let Some(value) = value else {
        remove_item(key);
        return;
    };
    match serde_json::to_string(value) {
        Ok(raw) => set_item(key, &raw),
        Err(error) => leptos::logging::warn!("storage JSON encode failed for key {key}: {error}"),
    }
}

/// Parse the JSON stored under `key`.
///
/// Returns `None` for absent entries, empty strings, the literal texts
/// `"undefined"` / `"null"` left behind by older clients, and anything that
/// fails to parse.
pub fn get_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get_item(key);
    if raw.is_empty() || raw == "undefined" || raw == "null" {
        return None;
    }
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(error) => {
            leptos::logging::warn!("storage JSON parse failed for key {key}: {error}");
            None
        }
    }
}

/// Console-owned keys currently present, with the prefix stripped.
pub fn project_keys() -> Vec<String> {
    let prefix = format!("{STORAGE_PREFIX}.");
    backend_keys()
        .into_iter()
        .filter_map(|key| key.strip_prefix(&prefix).map(str::to_owned))
        .collect()
}

/// Remove every console-owned entry, leaving unrelated keys untouched.
pub fn clear() {
    let prefix = format!("{STORAGE_PREFIX}.");
    for key in backend_keys() {
        if key.starts_with(&prefix) {
            backend_remove(&key);
        }
    }
}

/// Diagnostic snapshot of storage usage; not consulted by console logic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageStats {
    /// Entries in the whole shared store, prefixed or not.
    pub total_items: usize,
    /// Entries under the console prefix.
    pub project_items: usize,
    /// The console-owned keys, prefix stripped.
    pub project_keys: Vec<String>,
}

/// Count total vs. console-owned entries.
pub fn storage_stats() -> StorageStats {
    let total_items = backend_keys().len();
    let project_keys = project_keys();
    StorageStats {
        total_items,
        project_items: project_keys.len(),
        project_keys,
    }
}
