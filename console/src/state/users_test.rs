use super::*;

fn account(id: u64, username: &str) -> User {
    User {
        id,
        username: username.to_owned(),
        email: format!("{username}@example.com"),
        is_admin: false,
        banned: false,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        updated_at: "2024-01-01T00:00:00Z".to_owned(),
    }
}

fn page_of(users: Vec<User>, total: u64) -> UserListPayload {
    UserListPayload {
        users,
        pagination: Pagination { page: 1, limit: DEFAULT_PAGE_LIMIT, total },
    }
}

#[test]
fn replace_page_swaps_rows_and_bookkeeping() {
    let mut state = UsersState::default();
    replace_page(&mut state, page_of(vec![account(1, "alice"), account(2, "bob")], 42));

    assert_eq!(state.users.len(), 2);
    assert_eq!(state.pagination.total, 42);
    assert_eq!(state.pagination.limit, DEFAULT_PAGE_LIMIT);
}

#[test]
fn page_count_rounds_up_and_never_drops_below_one() {
    let mut state = UsersState::default();
    assert_eq!(state.page_count(), 1);

    replace_page(&mut state, page_of(vec![], 41));
    assert_eq!(state.page_count(), 3);

    state.pagination.total = 40;
    assert_eq!(state.page_count(), 2);

    // A zero limit must not divide by zero.
    state.pagination.limit = 0;
    state.pagination.total = 5;
    assert_eq!(state.page_count(), 5);
}

#[test]
fn upsert_replaces_a_row_in_place() {
    let mut state = UsersState::default();
    replace_page(&mut state, page_of(vec![account(1, "alice"), account(2, "bob")], 2));

    let mut banned = account(2, "bob");
    banned.banned = true;
    upsert_user(&mut state, banned);

    assert_eq!(state.users.len(), 2);
    assert_eq!(state.users[1].id, 2);
    assert!(state.users[1].banned);
    assert_eq!(state.pagination.total, 2);
}

#[test]
fn upsert_prepends_an_unknown_row_and_grows_the_total() {
    let mut state = UsersState::default();
    replace_page(&mut state, page_of(vec![account(1, "alice")], 1));

    upsert_user(&mut state, account(9, "carol"));

    assert_eq!(state.users[0].id, 9);
    assert_eq!(state.users.len(), 2);
    assert_eq!(state.pagination.total, 2);
}

#[test]
fn remove_drops_the_row_and_shrinks_the_total() {
    let mut state = UsersState::default();
    replace_page(&mut state, page_of(vec![account(1, "alice"), account(2, "bob")], 8));

    remove_user(&mut state, 1);

    assert_eq!(state.users.len(), 1);
    assert_eq!(state.users[0].id, 2);
    assert_eq!(state.pagination.total, 7);
}

#[test]
fn remove_of_an_absent_id_changes_nothing() {
    let mut state = UsersState::default();
    replace_page(&mut state, page_of(vec![account(1, "alice")], 1));

    remove_user(&mut state, 99);

    assert_eq!(state.users.len(), 1);
    assert_eq!(state.pagination.total, 1);
}

#[test]
fn find_locates_rows_by_id() {
    let mut state = UsersState::default();
    replace_page(&mut state, page_of(vec![account(1, "alice"), account(2, "bob")], 2));

    assert_eq!(state.find(2).map(|u| u.username.as_str()), Some("bob"));
    assert!(state.find(3).is_none());
}
