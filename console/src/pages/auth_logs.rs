//! Authentication audit page with a username filter.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read-only view over the RADIUS attempt log. The filter is applied on
//! submit, not per keystroke, and an empty filter is never sent.

#[cfg(test)]
#[path = "auth_logs_test.rs"]
mod auth_logs_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::ConsoleHeader;
use crate::components::pagination::Pager;
use crate::net::api::ApiClient;
use crate::net::types::{AuthLog, Pagination};
use crate::state::session::Session;
use crate::state::users::DEFAULT_PAGE_LIMIT;
use crate::util::guard;

/// Trimmed filter, or `None` when the operator cleared it.
fn normalize_filter(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn outcome_label(success: bool) -> &'static str {
    if success { "accept" } else { "reject" }
}

fn outcome_class(success: bool) -> &'static str {
    if success {
        "log-table__outcome log-table__outcome--accept"
    } else {
        "log-table__outcome log-table__outcome--reject"
    }
}

/// NAS fields are optional; render a placeholder when absent.
fn nas_display(value: Option<String>) -> String {
    match value {
        Some(text) if !text.is_empty() => text,
        _ => "-".to_owned(),
    }
}

#[component]
pub fn AuthLogsPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    guard::install_unauth_redirect(session.state, navigate);

    let logs = RwSignal::new(Vec::<AuthLog>::new());
    let pagination = RwSignal::new(Pagination {
        page: 1,
        limit: DEFAULT_PAGE_LIMIT,
        total: 0,
    });
    let loading = RwSignal::new(false);
    let page = RwSignal::new(1_u64);
    let filter_input = RwSignal::new(String::new());
    let applied_filter = RwSignal::new(None::<String>);

    // Refetch when the requested page or the applied filter changes.
    let fetch_api = api.clone();
    Effect::new(move || {
        let requested = page.get();
        let filter = applied_filter.get();
        loading.set(true);

        #[cfg(feature = "csr")]
        {
            let api = fetch_api.clone();
            leptos::task::spawn_local(async move {
                match api
                    .auth_logs(requested, DEFAULT_PAGE_LIMIT, filter.as_deref())
                    .await
                {
                    Ok(payload) => {
                        logs.set(payload.logs);
                        pagination.set(payload.pagination);
                        loading.set(false);
                    }
                    Err(_) => loading.set(false),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&fetch_api, requested, filter);
            loading.set(false);
        }
    });

    let on_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        applied_filter.set(normalize_filter(&filter_input.get()));
        page.set(1);
    };

    let on_page = Callback::new(move |requested| page.set(requested));

    let rows = move || {
        logs.get()
            .into_iter()
            .map(|entry| {
                let outcome = outcome_label(entry.success);
                let outcome_css = outcome_class(entry.success);
                view! {
                    <tr class="log-table__row" title=entry.user_agent>
                        <td class="log-table__stamp">{entry.created_at}</td>
                        <td class="log-table__name">{entry.username}</td>
                        <td>{entry.auth_type}</td>
                        <td class=outcome_css>{outcome}</td>
                        <td>{entry.ip_address}</td>
                        <td>{nas_display(entry.device_mac)}</td>
                        <td>{nas_display(entry.target_ssid)}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    let visible_session = session.clone();
    view! {
        <Show
            when=move || visible_session.state.get().is_authenticated()
            fallback=|| view! { <p class="console-page__redirect">"Redirecting to sign-in..."</p> }
        >
            <div class="console-page auth-logs-page">
                <ConsoleHeader/>
                <main class="console-page__body">
                    <header class="console-page__head">
                        <h1>"Auth Logs"</h1>
                        <form class="log-filter" on:submit=on_filter>
                            <input
                                class="log-filter__input"
                                type="text"
                                placeholder="filter by username"
                                prop:value=move || filter_input.get()
                                on:input=move |ev| filter_input.set(event_target_value(&ev))
                            />
                            <button class="btn" type="submit">
                                "Filter"
                            </button>
                        </form>
                    </header>

                    <Show
                        when=move || !loading.get()
                        fallback=move || view! { <p>"Loading logs..."</p> }
                    >
                        <Show when=move || logs.get().is_empty()>
                            <p class="console-page__empty">"No authentication records."</p>
                        </Show>
                        <table class="data-table log-table">
                            <thead>
                                <tr>
                                    <th>"Time"</th>
                                    <th>"Username"</th>
                                    <th>"Type"</th>
                                    <th>"Result"</th>
                                    <th>"Client IP"</th>
                                    <th>"Device MAC"</th>
                                    <th>"SSID"</th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    </Show>

                    <Pager
                        pagination=Signal::derive(move || pagination.get())
                        on_page=on_page
                    />
                </main>
            </div>
        </Show>
    }
}
