#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn read_preference_defaults_to_light() {
    storage::remove_item(storage::keys::THEME);
    assert!(!read_preference());
}

#[test]
fn toggle_flips_and_persists_choice() {
    assert!(toggle(false));
    assert_eq!(storage::get_item(storage::keys::THEME), "dark");

    assert!(!toggle(true));
    assert_eq!(storage::get_item(storage::keys::THEME), "light");
}

#[test]
fn stored_preference_wins_over_system_default() {
    storage::set_item(storage::keys::THEME, "dark");
    assert!(read_preference());

    storage::set_item(storage::keys::THEME, "light");
    assert!(!read_preference());
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
