//! Account management page: list, create, ban, delete, set passwords.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin-facing table over `/admin/users`. Mutations fold the server's
//! returned row back into the page state instead of refetching. Actions on
//! the operator's own row stay disabled; the server rejects them anyway.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::ConsoleHeader;
use crate::components::pagination::Pager;
use crate::net::api::ApiClient;
#[cfg(feature = "csr")]
use crate::net::types::AdminChangePasswordRequest;
use crate::net::types::CreateUserRequest;
#[cfg(feature = "csr")]
use crate::state::notice;
use crate::state::notice::NoticeState;
use crate::state::session::Session;
#[cfg(feature = "csr")]
use crate::state::users::{DEFAULT_PAGE_LIMIT, remove_user, replace_page, upsert_user};
use crate::state::users::UsersState;
use crate::util::guard;

/// Client-side mirror of the server's account rules.
fn validate_new_user(
    username: &str,
    email: &str,
    password: &str,
    admin: bool,
) -> Result<CreateUserRequest, &'static str> {
    let username = username.trim();
    let name_len = username.chars().count();
    if name_len < 3 || name_len > 50 {
        return Err("Username must be 3-50 characters.");
    }
    let email = email.trim();
    if !email_looks_valid(email) {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters.");
    }
    Ok(CreateUserRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        is_admin: admin.then_some(true),
    })
}

fn validate_new_password(password: &str) -> Result<String, &'static str> {
    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters.");
    }
    Ok(password.to_owned())
}

// Coarse shape check; the server runs the real validator.
fn email_looks_valid(email: &str) -> bool {
    email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty()
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
    })
}

fn role_label(is_admin: bool) -> &'static str {
    if is_admin { "admin" } else { "user" }
}

fn status_label(banned: bool) -> &'static str {
    if banned { "banned" } else { "active" }
}

fn ban_action_label(banned: bool) -> &'static str {
    if banned { "Unban" } else { "Ban" }
}

/// Date prefix of an RFC 3339 stamp, or the raw value when it is too short.
fn short_stamp(stamp: &str) -> &str {
    stamp.get(..10).unwrap_or(stamp)
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = expect_context::<ApiClient>();
    let users = expect_context::<RwSignal<UsersState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    guard::install_unauth_redirect(session.state, navigate);

    let page = RwSignal::new(1_u64);
    let show_create = RwSignal::new(false);
    let password_for = RwSignal::new(None::<u64>);
    let delete_for = RwSignal::new(None::<u64>);
    let ban_pending = RwSignal::new(None::<u64>);

    // Refetch whenever the requested page changes.
    let fetch_api = api.clone();
    Effect::new(move || {
        let requested = page.get();
        users.update(|s| s.loading = true);

        #[cfg(feature = "csr")]
        {
            let api = fetch_api.clone();
            leptos::task::spawn_local(async move {
                match api.users(requested, DEFAULT_PAGE_LIMIT).await {
                    Ok(payload) => {
                        users.update(|s| {
                            replace_page(s, payload);
                            s.loading = false;
                        });
                    }
                    Err(_) => users.update(|s| s.loading = false),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&fetch_api, requested);
            users.update(|s| s.loading = false);
        }
    });

    let on_create = move |_| show_create.set(true);
    let on_create_cancel = Callback::new(move |()| show_create.set(false));
    let on_password_cancel = Callback::new(move |()| password_for.set(None));
    let on_delete_cancel = Callback::new(move |()| delete_for.set(None));
    let on_page = Callback::new(move |requested| page.set(requested));

    let rows_session = session.clone();
    let rows_api = api.clone();
    let rows = move || {
        let my_id = rows_session.state.get().user.as_ref().map(|user| user.id);
        users
            .get()
            .users
            .into_iter()
            .map(|row| {
                let row_id = row.id;
                let is_self = my_id == Some(row_id);
                let banned = row.banned;
                let status_class = if banned {
                    "data-table__status data-table__status--banned"
                } else {
                    "data-table__status data-table__status--active"
                };
                let created = short_stamp(&row.created_at).to_owned();

                let ban_api = rows_api.clone();
                let on_toggle_ban = move |_| {
                    if ban_pending.get_untracked().is_some() {
                        return;
                    }
                    ban_pending.set(Some(row_id));

                    #[cfg(feature = "csr")]
                    {
                        let api = ban_api.clone();
                        leptos::task::spawn_local(async move {
                            if let Ok(updated) = api.toggle_user_ban(row_id).await {
                                let text = if updated.banned {
                                    "User banned."
                                } else {
                                    "User unbanned."
                                };
                                users.update(|s| upsert_user(s, updated));
                                notices.update(|s| {
                                    notice::push_success(s, text.to_owned());
                                });
                            }
                            ban_pending.set(None);
                        });
                    }
                    #[cfg(not(feature = "csr"))]
                    {
                        let _ = (&ban_api, notices);
                        ban_pending.set(None);
                    }
                };

                view! {
                    <tr class="data-table__row">
                        <td>{row_id}</td>
                        <td class="data-table__name">{row.username}</td>
                        <td>{row.email}</td>
                        <td>{role_label(row.is_admin)}</td>
                        <td class=status_class>{status_label(banned)}</td>
                        <td class="data-table__stamp">{created}</td>
                        <td class="data-table__actions">
                            <button class="btn" on:click=move |_| password_for.set(Some(row_id))>
                                "Password"
                            </button>
                            <button
                                class="btn"
                                disabled=move || is_self || ban_pending.get().is_some()
                                on:click=on_toggle_ban
                            >
                                {ban_action_label(banned)}
                            </button>
                            <button
                                class="btn btn--danger"
                                disabled=is_self
                                on:click=move |_| delete_for.set(Some(row_id))
                            >
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };
    // Copy handle: the builder is not Copy and must not be moved out of the
    // re-runnable view closures below.
    let rows = StoredValue::new(rows);

    let visible_session = session.clone();
    view! {
        <Show
            when=move || visible_session.state.get().is_authenticated()
            fallback=|| view! { <p class="console-page__redirect">"Redirecting to sign-in..."</p> }
        >
            <div class="console-page users-page">
                <ConsoleHeader/>
                <main class="console-page__body">
                    <header class="console-page__head">
                        <h1>"Users"</h1>
                        <button class="btn btn--primary" on:click=on_create>
                            "+ New User"
                        </button>
                    </header>

                    <Show
                        when=move || !users.get().loading
                        fallback=move || view! { <p>"Loading users..."</p> }
                    >
                        <Show when=move || users.get().users.is_empty()>
                            <p class="console-page__empty">"No users on this page."</p>
                        </Show>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Username"</th>
                                    <th>"Email"</th>
                                    <th>"Role"</th>
                                    <th>"Status"</th>
                                    <th>"Created"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>{move || rows.with_value(|build| build())}</tbody>
                        </table>
                    </Show>

                    <Pager
                        pagination=Signal::derive(move || users.get().pagination)
                        on_page=on_page
                    />
                </main>

                <Show when=move || show_create.get()>
                    <CreateUserDialog on_cancel=on_create_cancel/>
                </Show>
                <Show when=move || password_for.get().is_some()>
                    <PasswordDialog user_id=password_for on_cancel=on_password_cancel/>
                </Show>
                <Show when=move || delete_for.get().is_some()>
                    <DeleteUserDialog user_id=delete_for on_cancel=on_delete_cancel/>
                </Show>
            </div>
        </Show>
    }
}

/// Modal dialog for creating an account.
#[component]
fn CreateUserDialog(on_cancel: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let users = expect_context::<RwSignal<UsersState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let admin = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request =
            match validate_new_user(&username.get(), &email.get(), &password.get(), admin.get()) {
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
                if let Ok(created) = api.create_user(&request).await {
                    users.update(|s| upsert_user(s, created));
                    notices.update(|s| {
                        notice::push_success(s, "User created.".to_owned());
                    });
                    on_cancel.run(());
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, request, users, notices);
            busy.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create User"</h2>
                <form class="dialog__form" on:submit=on_submit>
                    <label class="dialog__label">
                        "Username"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Email"
                        <input
                            class="dialog__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Password"
                        <input
                            class="dialog__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__check">
                        <input
                            type="checkbox"
                            prop:checked=move || admin.get()
                            on:change=move |ev| admin.set(event_target_checked(&ev))
                        />
                        "Administrator"
                    </label>
                    <Show when=move || !info.get().is_empty()>
                        <p class="dialog__message">{move || info.get()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                            "Create"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Modal dialog for force-setting another account's password.
#[component]
fn PasswordDialog(user_id: RwSignal<Option<u64>>, on_cancel: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(id) = user_id.get_untracked() else {
            return;
        };
        let new_password = match validate_new_password(&password.get()) {
            Ok(value) => value,
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
                let request = AdminChangePasswordRequest { new_password };
                if api.admin_change_password(id, &request).await.is_ok() {
                    notices.update(|s| {
                        notice::push_success(s, "Password updated.".to_owned());
                    });
                    on_cancel.run(());
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, id, new_password, notices);
            busy.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Set Password"</h2>
                <form class="dialog__form" on:submit=on_submit>
                    <label class="dialog__label">
                        "New Password"
                        <input
                            class="dialog__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !info.get().is_empty()>
                        <p class="dialog__message">{move || info.get()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Modal dialog confirming account removal.
#[component]
fn DeleteUserDialog(user_id: RwSignal<Option<u64>>, on_cancel: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let users = expect_context::<RwSignal<UsersState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        let Some(id) = user_id.get_untracked() else {
            return;
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                if api.delete_user(id).await.is_ok() {
                    users.update(|s| remove_user(s, id));
                    notices.update(|s| {
                        notice::push_success(s, "User deleted.".to_owned());
                    });
                }
                busy.set(false);
                on_cancel.run(());
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, id, users, notices);
            busy.set(false);
            on_cancel.run(());
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete User"</h2>
                <p class="dialog__danger">
                    "This permanently removes the account and its credentials."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
