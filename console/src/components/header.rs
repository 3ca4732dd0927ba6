//! Top navigation bar shared by every signed-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the route links, the operator's identity, the dark-mode toggle,
//! and the sign-out control. Admin-only routes are hidden from regular
//! operators; the server still enforces the role on every call.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::state::ui::UiState;

#[component]
pub fn ConsoleHeader() -> impl IntoView {
    let session = expect_context::<Session>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let identity_session = session.clone();
    let identity = move || {
        identity_session
            .state
            .get()
            .user
            .map_or_else(|| "...".to_owned(), |user| user.username)
    };
    let role_session = session.clone();
    let role = move || {
        if role_session.state.get().is_admin() {
            "admin"
        } else {
            "user"
        }
    };
    let nav_session = session.clone();

    let on_logout = move |_| {
        session.logout();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="toolbar console-header">
            <span class="toolbar__brand">"RADIUS Management"</span>
            <nav class="toolbar__nav">
                <A href="/">"Dashboard"</A>
                <Show when=move || nav_session.state.get().is_admin()>
                    <A href="/users">"Users"</A>
                    <A href="/auth-logs">"Auth Logs"</A>
                </Show>
                <A href="/profile">"Profile"</A>
            </nav>

            <span class="toolbar__spacer"></span>

            <button
                class="btn toolbar__dark-toggle"
                on:click=move |_| {
                    let next = crate::util::dark_mode::toggle(ui.get().dark_mode);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <span class="toolbar__self">
                {identity}
                " ("
                <span class="toolbar__self-role">{role}</span>
                ")"
            </span>

            <button class="btn toolbar__logout" on:click=on_logout title="Sign out">
                "Logout"
            </button>
        </header>
    }
}
