//! Pager for server-paginated tables.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

use crate::net::types::Pagination;

fn summary(pagination: &Pagination) -> String {
    format!(
        "page {} / {} ({} total)",
        pagination.page.max(1),
        pagination.page_count(),
        pagination.total
    )
}

fn prev_page(pagination: &Pagination) -> Option<u64> {
    (pagination.page > 1).then(|| pagination.page - 1)
}

fn next_page(pagination: &Pagination) -> Option<u64> {
    (pagination.page < pagination.page_count()).then(|| pagination.page + 1)
}

/// Prev/next pager. `on_page` receives the requested page number.
#[component]
pub fn Pager(pagination: Signal<Pagination>, on_page: Callback<u64>) -> impl IntoView {
    view! {
        <div class="pager">
            <button
                class="btn pager__prev"
                disabled=move || prev_page(&pagination.get()).is_none()
                on:click=move |_| {
                    if let Some(page) = prev_page(&pagination.get()) {
                        on_page.run(page);
                    }
                }
            >
                "Prev"
            </button>
            <span class="pager__summary">{move || summary(&pagination.get())}</span>
            <button
                class="btn pager__next"
                disabled=move || next_page(&pagination.get()).is_none()
                on:click=move |_| {
                    if let Some(page) = next_page(&pagination.get()) {
                        on_page.run(page);
                    }
                }
            >
                "Next"
            </button>
        </div>
    }
}
