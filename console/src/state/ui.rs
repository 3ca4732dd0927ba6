//! Console chrome state.
//!
//! DESIGN
//! ======
//! Presentation-only concerns live here, separate from session and domain
//! state, so theme handling never entangles the auth lifecycle.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the console shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}
