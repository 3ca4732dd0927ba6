//! Root application component: context wiring, routing, and startup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything shared flows from here. The API client is wired to the
//! session in one direction only: it reads the token through an injected
//! accessor and pushes failures through injected hooks, so neither layer
//! owns the other. A 401 anywhere clears the session and hard-redirects to
//! the sign-in route resolved against the deployment prefix.

use std::borrow::Cow;
use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notices::NoticeHost;
use crate::net::api::ApiClient;
use crate::pages::{
    auth_logs::AuthLogsPage, dashboard::DashboardPage, login::LoginPage, profile::ProfilePage,
    users::UsersPage,
};
use crate::state::notice::{self, NoticeState};
use crate::state::session::{Session, SessionState, clear_session};
use crate::state::ui::UiState;
use crate::state::users::UsersState;
use crate::util::base_path::{api_base, route_base};
#[cfg(feature = "csr")]
use crate::util::base_path::login_url;
use crate::util::dark_mode;

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let notices = RwSignal::new(NoticeState::default());
    let state = RwSignal::new(SessionState::restore());

    let api = ApiClient::new(
        api_base(),
        Arc::new(move || state.with_untracked(|s| s.token.clone())),
    )
    .with_notifier(Arc::new(move |text| {
        notices.update(|s| {
            notice::push_error(s, text);
        });
    }))
    .with_unauthorized_hook(Arc::new(move || {
        state.update(clear_session);
        #[cfg(feature = "csr")]
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&login_url());
        }
    }));

    let session = Session::new(state, api.clone());
    let users = RwSignal::new(UsersState::default());
    let ui = RwSignal::new(UiState {
        dark_mode: dark_mode::read_preference(),
    });

    provide_context(session.clone());
    provide_context(api);
    provide_context(users);
    provide_context(notices);
    provide_context(ui);

    Effect::new(move || dark_mode::apply(ui.get().dark_mode));

    // A restored token without a profile means the page was reloaded. The
    // router stays behind the boot screen until that token is verified, so
    // a stale session demotes to signed-out instead of flashing the
    // authenticated shell. Failure already cleared the session; just log it.
    let booting = RwSignal::new(false);
    #[cfg(feature = "csr")]
    if state.with_untracked(|s| s.is_authenticated() && s.user.is_none()) {
        booting.set(true);
        let bootstrap = session.clone();
        leptos::task::spawn_local(async move {
            if let Err(error) = bootstrap.load_user_info().await {
                leptos::logging::warn!("session restore failed: {error}");
            }
            booting.set(false);
        });
    }

    view! {
        <Title text="RADIUS Management"/>

        <Show
            when=move || !booting.get()
            fallback=|| view! { <p class="console-boot">"Restoring session..."</p> }
        >
            <Router base=Cow::from(route_base())>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("users") view=UsersPage/>
                    <Route path=StaticSegment("auth-logs") view=AuthLogsPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </Router>
        </Show>

        <NoticeHost/>
    }
}
