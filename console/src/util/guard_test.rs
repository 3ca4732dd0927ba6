use super::*;
use crate::net::types::User;

fn operator() -> User {
    User {
        id: 1,
        username: "admin".to_owned(),
        email: "admin@example.com".to_owned(),
        is_admin: true,
        banned: false,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        updated_at: "2024-01-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn redirects_when_no_token() {
    let state = SessionState::default();
    assert!(should_redirect_unauth(&state));
}

#[test]
fn does_not_redirect_with_token() {
    let state = SessionState {
        token: "abc".to_owned(),
        user: None,
    };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn cached_profile_without_token_still_redirects() {
    let state = SessionState {
        token: String::new(),
        user: Some(operator()),
    };
    assert!(should_redirect_unauth(&state));
}
