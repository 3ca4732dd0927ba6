#![cfg(not(feature = "csr"))]

use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn plain_client(token: &str) -> ApiClient {
    let token = token.to_owned();
    ApiClient::new("/api/v1".to_owned(), Arc::new(move || token.clone()))
}

fn counting_client() -> (ApiClient, Arc<Mutex<Vec<String>>>, Arc<AtomicUsize>) {
    let notices = Arc::new(Mutex::new(Vec::new()));
    let unauthorized = Arc::new(AtomicUsize::new(0));
    let notice_sink = Arc::clone(&notices);
    let unauthorized_count = Arc::clone(&unauthorized);
    let client = plain_client("tok")
        .with_notifier(Arc::new(move |text| notice_sink.lock().unwrap().push(text)))
        .with_unauthorized_hook(Arc::new(move || {
            unauthorized_count.fetch_add(1, Ordering::SeqCst);
        }));
    (client, notices, unauthorized)
}

// ============================================================================
// Endpoint formatting
// ============================================================================

#[test]
fn users_query_carries_page_and_limit() {
    assert_eq!(users_query(1, 20), "/admin/users?page=1&limit=20");
    assert_eq!(users_query(7, 100), "/admin/users?page=7&limit=100");
}

#[test]
fn admin_user_endpoints_embed_the_id() {
    assert_eq!(user_password_endpoint(42), "/admin/users/42/password");
    assert_eq!(user_ban_endpoint(42), "/admin/users/42/ban");
    assert_eq!(user_endpoint(42), "/admin/users/42");
}

#[test]
fn auth_logs_query_without_filter_has_no_username_parameter() {
    assert_eq!(auth_logs_query(2, 50, None), "/admin/auth-logs?page=2&limit=50");
}

#[test]
fn auth_logs_query_with_filter_appends_username() {
    assert_eq!(
        auth_logs_query(1, 20, Some("alice")),
        "/admin/auth-logs?page=1&limit=20&username=alice"
    );
}

#[test]
fn auth_logs_query_ignores_empty_filter() {
    assert_eq!(auth_logs_query(1, 20, Some("")), "/admin/auth-logs?page=1&limit=20");
}

#[test]
fn auth_logs_query_escapes_the_filter_value() {
    assert_eq!(
        auth_logs_query(1, 20, Some("al ice&co")),
        "/admin/auth-logs?page=1&limit=20&username=al%20ice%26co"
    );
}

#[test]
fn encode_query_value_passes_unreserved_characters_through() {
    assert_eq!(encode_query_value("AZaz09-_.~"), "AZaz09-_.~");
}

#[test]
fn encode_query_value_escapes_everything_else() {
    assert_eq!(encode_query_value("a/b?c=d"), "a%2Fb%3Fc%3Dd");
    assert_eq!(encode_query_value("日"), "%E6%97%A5");
}

// ============================================================================
// Bearer header
// ============================================================================

#[test]
fn bearer_header_present_when_token_is_set() {
    assert_eq!(bearer_header("abc123"), Some("Bearer abc123".to_owned()));
}

#[test]
fn bearer_header_absent_when_token_is_empty() {
    assert_eq!(bearer_header(""), None);
}

// ============================================================================
// Failure dispatch
// ============================================================================

#[test]
fn session_expiry_fires_unauthorized_hook_without_a_notice() {
    let (client, notices, unauthorized) = counting_client();

    client.report(&ApiError::SessionExpired);

    assert_eq!(unauthorized.load(Ordering::SeqCst), 1);
    assert!(notices.lock().unwrap().is_empty());
}

#[test]
fn server_error_notifies_with_the_server_message() {
    let (client, notices, unauthorized) = counting_client();

    client.report(&ApiError::Server {
        status: 400,
        message: "Cannot delete yourself".to_owned(),
    });

    assert_eq!(unauthorized.load(Ordering::SeqCst), 0);
    assert_eq!(notices.lock().unwrap().as_slice(), ["Cannot delete yourself"]);
}

#[test]
fn network_error_notifies_with_generic_text() {
    let (client, notices, _) = counting_client();

    client.report(&ApiError::Network);

    let recorded = notices.lock().unwrap();
    assert_eq!(recorded.len(), 1);
    assert!(recorded[0].contains("network"));
}

#[test]
fn fail_reports_exactly_once_and_returns_the_error() {
    let (client, notices, _) = counting_client();

    let error = client.fail(ApiError::Server {
        status: 409,
        message: "Username already exists".to_owned(),
    });

    assert_eq!(notices.lock().unwrap().len(), 1);
    assert_eq!(
        error,
        ApiError::Server {
            status: 409,
            message: "Username already exists".to_owned(),
        }
    );
}

// ============================================================================
// Native stubs
// ============================================================================

#[test]
fn endpoints_error_outside_the_browser() {
    let client = plain_client("tok");
    futures::executor::block_on(async {
        let login = client
            .login(&LoginRequest {
                username: "admin".to_owned(),
                password: "admin123".to_owned(),
            })
            .await;
        assert!(matches!(login, Err(ApiError::Request(_))));

        assert!(client.current_user().await.is_err());
        assert!(client.users(1, 20).await.is_err());
        assert!(client.stats().await.is_err());
        assert!(client.auth_logs(1, 20, None).await.is_err());
        assert!(client.delete_user(9).await.is_err());
    });
}

#[test]
fn base_path_is_preserved() {
    let client = plain_client("");
    assert_eq!(client.base_path(), "/api/v1");
}
