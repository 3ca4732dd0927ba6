#![cfg(not(feature = "csr"))]

use super::*;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Profile {
    id: u64,
    username: String,
    email: String,
}

fn profile() -> Profile {
    Profile {
        id: 1,
        username: "test".to_owned(),
        email: "test@example.com".to_owned(),
    }
}

// =============================================================
// Prefix mapping
// =============================================================

#[test]
fn set_item_writes_under_prefixed_key() {
    set_item(keys::AUTH_TOKEN, "test-token");

    assert_eq!(
        backend_get("radius_mgnt.auth_token"),
        Some("test-token".to_owned())
    );
    assert_eq!(backend_get("auth_token"), None);
}

#[test]
fn get_item_reads_prefixed_key() {
    assert!(backend_set("radius_mgnt.auth_token", "test-token"));
    assert_eq!(get_item(keys::AUTH_TOKEN), "test-token");
}

#[test]
fn get_item_round_trips_set_item() {
    set_item("session_note", "v1");
    assert_eq!(get_item("session_note"), "v1");
}

#[test]
fn get_item_defaults_to_empty_string() {
    assert_eq!(get_item("non-existent-key"), "");
}

#[test]
fn get_item_or_returns_default_when_absent() {
    assert_eq!(
        get_item_or("non-existent-key", "default-value"),
        "default-value"
    );
}

// =============================================================
// JSON helpers
// =============================================================

#[test]
fn set_json_then_get_json_round_trips() {
    set_json(keys::AUTH_USER, Some(&profile()));

    assert_eq!(get_json::<Profile>(keys::AUTH_USER), Some(profile()));
    let raw = backend_get("radius_mgnt.auth_user").expect("raw entry present");
    assert_eq!(raw, serde_json::to_string(&profile()).expect("encode"));
}

#[test]
fn get_json_returns_none_for_invalid_json() {
    assert!(backend_set("radius_mgnt.invalid_json", "invalid-json-string"));
    assert_eq!(get_json::<Profile>("invalid_json"), None);
}

#[test]
fn get_json_returns_none_for_undefined_literal() {
    assert!(backend_set("radius_mgnt.undefined_value", "undefined"));
    assert_eq!(get_json::<Profile>("undefined_value"), None);
}

#[test]
fn get_json_returns_none_for_null_literal() {
    assert!(backend_set("radius_mgnt.null_value", "null"));
    assert_eq!(get_json::<Profile>("null_value"), None);
}

#[test]
fn get_json_returns_none_for_empty_string() {
    assert!(backend_set("radius_mgnt.empty_value", ""));
    assert_eq!(get_json::<Profile>("empty_value"), None);
}

#[test]
fn set_json_none_removes_entry() {
    set_item(keys::AUTH_USER, "anything");
    assert!(has_item(keys::AUTH_USER));

    set_json(keys::AUTH_USER, None::<&Profile>);
    assert!(!has_item(keys::AUTH_USER));
}

// =============================================================
// Removal and presence
// =============================================================

#[test]
fn remove_item_drops_prefixed_entry() {
    set_item(keys::AUTH_TOKEN, "test-token");
    assert!(has_item(keys::AUTH_TOKEN));

    remove_item(keys::AUTH_TOKEN);
    assert!(!has_item(keys::AUTH_TOKEN));
}

#[test]
fn has_item_tracks_presence() {
    reset_backend();
    assert!(!has_item(keys::AUTH_TOKEN));

    set_item(keys::AUTH_TOKEN, "test-token");
    assert!(has_item(keys::AUTH_TOKEN));
}

#[test]
fn has_item_true_for_stored_empty_string() {
    set_item("empty_marker", "");
    assert!(has_item("empty_marker"));
}

// =============================================================
// Prefix-scoped enumeration
// =============================================================

#[test]
fn project_keys_lists_only_console_keys() {
    set_item(keys::AUTH_TOKEN, "token");
    set_item(keys::AUTH_USER, "user");
    assert!(backend_set("other-app.data", "other-data"));

    let listed = project_keys();
    assert!(listed.contains(&"auth_token".to_owned()));
    assert!(listed.contains(&"auth_user".to_owned()));
    assert!(!listed.iter().any(|key| key.contains("other-app")));
}

#[test]
fn clear_removes_only_console_keys() {
    set_item(keys::AUTH_TOKEN, "token");
    set_item(keys::AUTH_USER, "user");
    assert!(backend_set("other-app.data", "other-data"));

    clear();

    assert!(!has_item(keys::AUTH_TOKEN));
    assert!(!has_item(keys::AUTH_USER));
    assert_eq!(backend_get("other-app.data"), Some("other-data".to_owned()));
}

#[test]
fn storage_stats_counts_total_and_project_entries() {
    reset_backend();
    set_item(keys::AUTH_TOKEN, "token");
    set_item(keys::AUTH_USER, "user");
    assert!(backend_set("other-app.data", "other-data"));

    let stats = storage_stats();
    assert_eq!(stats.total_items, 3);
    assert_eq!(stats.project_items, 2);
    assert!(stats.project_keys.contains(&"auth_token".to_owned()));
    assert!(stats.project_keys.contains(&"auth_user".to_owned()));
}
