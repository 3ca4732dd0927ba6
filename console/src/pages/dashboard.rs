//! Dashboard page showing account and authentication counters.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. Admins see instance-wide counters from
//! the admin endpoint; regular operators get the caller-scoped ones.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::ConsoleHeader;
use crate::net::api::ApiClient;
use crate::state::session::Session;
use crate::util::guard;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    guard::install_unauth_redirect(session.state, navigate);

    let stats_session = session.clone();
    let stats = LocalResource::new(move || {
        let api = api.clone();
        let admin = stats_session.state.get().is_admin();
        async move {
            if admin {
                api.admin_stats().await
            } else {
                api.stats().await
            }
        }
    });

    let visible_session = session.clone();
    view! {
        <Show
            when=move || visible_session.state.get().is_authenticated()
            fallback=|| view! { <p class="console-page__redirect">"Redirecting to sign-in..."</p> }
        >
            <div class="console-page dashboard-page">
                <ConsoleHeader/>
                <main class="console-page__body">
                    <h1>"Overview"</h1>
                    <Suspense fallback=move || view! { <p>"Loading stats..."</p> }>
                        {move || {
                            stats
                                .get()
                                .map(|result| match result {
                                    Ok(counters) => {
                                        view! {
                                            <div class="stat-grid">
                                                <StatCard label="Total users" value=counters.total_users/>
                                                <StatCard label="Active users" value=counters.active_users/>
                                                <StatCard label="Banned users" value=counters.banned_users/>
                                                <StatCard label="Auth requests" value=counters.auth_count/>
                                            </div>
                                        }
                                            .into_any()
                                    }
                                    Err(_) => {
                                        view! {
                                            <p class="console-page__error">"Stats are unavailable."</p>
                                        }
                                            .into_any()
                                    }
                                })
                        }}
                    </Suspense>
                </main>
            </div>
        </Show>
    }
}

#[component]
fn StatCard(label: &'static str, value: i64) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
