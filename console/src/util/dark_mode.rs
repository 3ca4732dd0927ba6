//! Dark mode initialization and toggle.
//!
//! Reads the operator's preference from the namespaced cache and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to the
//! cache and updates that attribute. Requires a browser environment.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::util::storage;

/// Read the dark mode preference from the namespaced cache.
///
/// Returns `true` if the operator previously chose dark mode, or if the
/// system prefers dark mode and no preference is stored.
pub fn read_preference() -> bool {
    match storage::get_item(storage::keys::THEME).as_str() {
        "dark" => true,
        "light" => false,
        _ => system_prefers_dark(),
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    storage::set_item(storage::keys::THEME, if next { "dark" } else { "light" });
    next
}
