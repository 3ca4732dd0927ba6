//! Operator session: bearer token, loaded profile, and every transition
//! between signed-in and signed-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and identity-aware components read `SessionState` through a
//! context signal. The `Session` handle pairs that signal with the API
//! client and owns the lifecycle: sign-in, profile loading, sign-out, and
//! the forced invalidation triggered when the server answers 401.
//!
//! DESIGN
//! ======
//! Every transition writes through to browser storage in the same call, so
//! the persisted copy cannot disagree with the in-memory one. Expiry and
//! sign-out share one clearing path and leave identical state behind.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, User};
use crate::util::storage::{self, keys};

/// Session facts shared through context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: String,
    pub user: Option<User>,
}

impl SessionState {
    /// True while a bearer token is held, whether or not the profile has
    /// loaded yet.
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /// True once the loaded profile carries the admin flag.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.is_admin)
    }

    /// Rebuild the session from browser storage at startup.
    pub fn restore() -> Self {
        Self {
            token: storage::get_item(keys::AUTH_TOKEN),
            user: storage::get_json(keys::AUTH_USER),
        }
    }
}

/// Record a fresh token in memory and in browser storage.
pub fn apply_token(state: &mut SessionState, token: String) {
    storage::set_item(keys::AUTH_TOKEN, &token);
    state.token = token;
}

/// Record the loaded profile in memory and in browser storage.
pub fn apply_user(state: &mut SessionState, user: User) {
    storage::set_json(keys::AUTH_USER, Some(&user));
    state.user = Some(user);
}

/// Drop the session from memory and remove both persisted keys.
pub fn clear_session(state: &mut SessionState) {
    storage::remove_item(keys::AUTH_TOKEN);
    storage::remove_item(keys::AUTH_USER);
    *state = SessionState::default();
}

/// Shared handle pairing the session signal with the API client.
#[derive(Clone)]
pub struct Session {
    pub state: RwSignal<SessionState>,
    api: ApiClient,
}

impl Session {
    pub fn new(state: RwSignal<SessionState>, api: ApiClient) -> Self {
        Self { state, api }
    }

    /// Current bearer token, empty when signed out.
    pub fn token(&self) -> String {
        self.state.with_untracked(|state| state.token.clone())
    }

    /// Exchange credentials for a bearer token.
    ///
    /// On success only the token is stored; the profile is fetched
    /// separately by [`Session::load_user_info`]. On failure the session is
    /// cleared before the error propagates, so a failed attempt never
    /// leaves partial state behind.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] when the credentials are
    /// rejected or the request fails.
    pub async fn login(&self, username: String, password: String) -> Result<(), ApiError> {
        let request = LoginRequest { username, password };
        match self.api.login(&request).await {
            Ok(response) => {
                self.state.update(|state| apply_token(state, response.token));
                Ok(())
            }
            Err(error) => {
                self.state.update(clear_session);
                Err(error)
            }
        }
    }

    /// Fetch and store the profile for the held token. A no-op without a
    /// token; any failure clears the session so a stale token cannot
    /// linger.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] when the profile fetch fails.
    pub async fn load_user_info(&self) -> Result<(), ApiError> {
        if !self.state.with_untracked(SessionState::is_authenticated) {
            return Ok(());
        }
        match self.api.current_user().await {
            Ok(user) => {
                self.state.update(|state| apply_user(state, user));
                Ok(())
            }
            Err(error) => {
                self.state.update(clear_session);
                Err(error)
            }
        }
    }

    /// Operator-requested sign-out. Purely local; the server keeps no
    /// session to revoke.
    pub fn logout(&self) {
        self.clear_auth();
    }

    /// Drop the session from memory and storage. Also the target of the
    /// 401 hook, so expiry and sign-out converge on one path.
    pub fn clear_auth(&self) {
        self.state.update(clear_session);
    }
}
