//! Account-management list state for the users page.
//!
//! DESIGN
//! ======
//! The server is the source of truth for pages; mutations that return the
//! updated row (ban toggles, creation) are folded into the current page in
//! place so the table refreshes without a second round trip.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::types::{Pagination, User, UserListPayload};

/// Page size requested when the operator has not picked one.
pub const DEFAULT_PAGE_LIMIT: u64 = 20;

/// One fetched page of accounts plus its pagination bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsersState {
    pub users: Vec<User>,
    pub pagination: Pagination,
    pub loading: bool,
}

impl UsersState {
    /// Number of pages implied by the server's total, never below one.
    pub fn page_count(&self) -> u64 {
        self.pagination.page_count()
    }

    pub fn find(&self, user_id: u64) -> Option<&User> {
        self.users.iter().find(|user| user.id == user_id)
    }
}

/// Swap in a freshly fetched page.
pub fn replace_page(state: &mut UsersState, payload: UserListPayload) {
    state.users = payload.users;
    state.pagination = payload.pagination;
}

/// Fold a server-returned row into the current page: replace the matching
/// row, or prepend a new one and grow the total.
pub fn upsert_user(state: &mut UsersState, user: User) {
    if let Some(existing) = state.users.iter_mut().find(|row| row.id == user.id) {
        *existing = user;
    } else {
        state.users.insert(0, user);
        state.pagination.total += 1;
    }
}

/// Drop a deleted row from the current page and shrink the total.
pub fn remove_user(state: &mut UsersState, user_id: u64) {
    let before = state.users.len();
    state.users.retain(|row| row.id != user_id);
    if state.users.len() < before {
        state.pagination.total = state.pagination.total.saturating_sub(1);
    }
}
