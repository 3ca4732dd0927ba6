//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route except the login view requires a signed-in operator. Route
//! components apply identical unauthenticated redirect behavior by installing
//! this effect on mount.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Whether the current visitor should be sent to the login view.
pub fn should_redirect_unauth(session: &SessionState) -> bool {
    !session.is_authenticated()
}

/// Redirect to `/login` whenever the session holds no token.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if should_redirect_unauth(&state) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
