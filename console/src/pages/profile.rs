//! Operator profile page with self-service password change.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::ConsoleHeader;
use crate::net::api::ApiClient;
use crate::net::types::ChangePasswordRequest;
#[cfg(feature = "csr")]
use crate::state::notice;
use crate::state::notice::NoticeState;
use crate::state::session::Session;
use crate::util::guard;

fn validate_password_change(
    old_password: &str,
    new_password: &str,
    confirm: &str,
) -> Result<ChangePasswordRequest, &'static str> {
    if old_password.is_empty() {
        return Err("Enter your current password.");
    }
    if new_password.chars().count() < 6 {
        return Err("New password must be at least 6 characters.");
    }
    if confirm != new_password {
        return Err("Passwords do not match.");
    }
    Ok(ChangePasswordRequest {
        old_password: old_password.to_owned(),
        new_password: new_password.to_owned(),
    })
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    guard::install_unauth_redirect(session.state, navigate);

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_password_change(
            &old_password.get(),
            &new_password.get(),
            &confirm.get(),
        ) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                if api.change_password(&request).await.is_ok() {
                    notices.update(|s| {
                        notice::push_success(s, "Password changed.".to_owned());
                    });
                    old_password.set(String::new());
                    new_password.set(String::new());
                    confirm.set(String::new());
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, request, notices);
            busy.set(false);
        }
    };

    // The signal itself is Copy, so the view closures below stay re-runnable.
    let profile_state = session.state;

    let visible_session = session.clone();
    view! {
        <Show
            when=move || visible_session.state.get().is_authenticated()
            fallback=|| view! { <p class="console-page__redirect">"Redirecting to sign-in..."</p> }
        >
            <div class="console-page profile-page">
                <ConsoleHeader/>
                <main class="console-page__body">
                    <h1>"Profile"</h1>
                    {move || {
                        profile_state
                            .get()
                            .user
                            .map(|user| {
                                view! {
                                    <dl class="profile-card">
                                        <dt>"Username"</dt>
                                        <dd>{user.username}</dd>
                                        <dt>"Email"</dt>
                                        <dd>{user.email}</dd>
                                        <dt>"Role"</dt>
                                        <dd>{if user.is_admin { "admin" } else { "user" }}</dd>
                                        <dt>"Created"</dt>
                                        <dd>{user.created_at}</dd>
                                    </dl>
                                }
                                    .into_any()
                            })
                            .unwrap_or_else(|| {
                                view! { <p>"Loading profile..."</p> }.into_any()
                            })
                    }}

                    <section class="profile-password">
                        <h2>"Change Password"</h2>
                        <form class="profile-password__form" on:submit=on_submit.clone()>
                            <label class="dialog__label">
                                "Current Password"
                                <input
                                    class="dialog__input"
                                    type="password"
                                    prop:value=move || old_password.get()
                                    on:input=move |ev| old_password.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="dialog__label">
                                "New Password"
                                <input
                                    class="dialog__input"
                                    type="password"
                                    prop:value=move || new_password.get()
                                    on:input=move |ev| new_password.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="dialog__label">
                                "Confirm New Password"
                                <input
                                    class="dialog__input"
                                    type="password"
                                    prop:value=move || confirm.get()
                                    on:input=move |ev| confirm.set(event_target_value(&ev))
                                />
                            </label>
                            <Show when=move || !info.get().is_empty()>
                                <p class="dialog__message">{move || info.get()}</p>
                            </Show>
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                "Update Password"
                            </button>
                        </form>
                    </section>
                </main>
            </div>
        </Show>
    }
}
