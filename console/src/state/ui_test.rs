use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_dark_mode_flips_in_place() {
    let mut state = UiState::default();
    state.dark_mode = !state.dark_mode;
    assert!(state.dark_mode);
    assert_ne!(state, UiState::default());
}
