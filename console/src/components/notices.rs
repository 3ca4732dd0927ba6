//! Toast overlay for transient notices.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API client's notifier hook pushes into `NoticeState`; this component
//! renders the queue in a fixed overlay. Clicking a notice dismisses it.

use leptos::prelude::*;

use crate::state::notice::{self, NoticeKind, NoticeState};

#[component]
pub fn NoticeHost() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-host">
            {move || {
                notices
                    .get()
                    .notices
                    .into_iter()
                    .map(|item| {
                        let id = item.id;
                        let class = match item.kind {
                            NoticeKind::Error => "notice notice--error",
                            NoticeKind::Success => "notice notice--success",
                        };
                        view! {
                            <div
                                class=class
                                on:click=move |_| notices.update(|s| notice::dismiss(s, id))
                            >
                                {item.text}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
