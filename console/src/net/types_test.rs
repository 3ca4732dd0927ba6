use super::*;

// =============================================================
// Envelope unwrapping
// =============================================================

#[test]
fn envelope_unwraps_profile_payload() {
    let json = r#"{
        "code": 200,
        "data": {
            "id": 1,
            "username": "admin",
            "email": "admin@example.com",
            "is_admin": true,
            "banned": false,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-03-01T12:00:00Z"
        }
    }"#;
    let envelope: Envelope<User> = serde_json::from_str(json).unwrap();
    assert_eq!(envelope.code, 200);
    assert_eq!(envelope.data.username, "admin");
    assert!(envelope.data.is_admin);
}

#[test]
fn envelope_tolerates_extra_message_field() {
    let json = r#"{
        "code": 201,
        "message": "User created successfully",
        "data": {
            "id": 7,
            "username": "carol",
            "email": "carol@example.com",
            "is_admin": false,
            "banned": false,
            "created_at": "2024-05-01T00:00:00Z",
            "updated_at": "2024-05-01T00:00:00Z"
        }
    }"#;
    let envelope: Envelope<User> = serde_json::from_str(json).unwrap();
    assert_eq!(envelope.data.id, 7);
}

#[test]
fn ack_defaults_missing_message_to_empty() {
    let ack: Ack = serde_json::from_str(r#"{"code": 200}"#).unwrap();
    assert_eq!(ack.message, "");
}

// =============================================================
// Defensive list parsing
// =============================================================

#[test]
fn user_list_accepts_null_users() {
    let json = r#"{
        "users": null,
        "pagination": {"page": 1, "limit": 20, "total": 0}
    }"#;
    let payload: UserListPayload = serde_json::from_str(json).unwrap();
    assert!(payload.users.is_empty());
    assert_eq!(payload.pagination.total, 0);
}

#[test]
fn auth_log_list_accepts_null_logs() {
    let json = r#"{
        "logs": null,
        "pagination": {"page": 3, "limit": 50, "total": 0}
    }"#;
    let payload: AuthLogPayload = serde_json::from_str(json).unwrap();
    assert!(payload.logs.is_empty());
    assert_eq!(payload.pagination.page, 3);
}

// =============================================================
// Auth log fields
// =============================================================

#[test]
fn auth_log_parses_full_server_row() {
    let json = r#"{
        "id": 42,
        "username": "alice",
        "auth_type": "authenticate",
        "success": true,
        "ip_address": "10.0.0.9",
        "user_agent": "radius-nas/1.2",
        "device_mac": "aa:bb:cc:dd:ee:ff",
        "target_ssid": "corp-wifi",
        "created_at": "2024-06-01T08:30:00Z"
    }"#;
    let log: AuthLog = serde_json::from_str(json).unwrap();
    assert_eq!(log.device_mac.as_deref(), Some("aa:bb:cc:dd:ee:ff"));
    assert_eq!(log.target_ssid.as_deref(), Some("corp-wifi"));
    assert!(log.success);
}

#[test]
fn auth_log_defaults_optional_nas_fields() {
    let json = r#"{
        "id": 43,
        "username": "bob",
        "auth_type": "authorize",
        "success": false,
        "ip_address": "10.0.0.10",
        "created_at": "2024-06-01T08:31:00Z"
    }"#;
    let log: AuthLog = serde_json::from_str(json).unwrap();
    assert_eq!(log.user_agent, "");
    assert_eq!(log.device_mac, None);
    assert_eq!(log.target_ssid, None);
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn create_user_request_omits_unset_admin_flag() {
    let body = CreateUserRequest {
        username: "dave".to_owned(),
        email: "dave@example.com".to_owned(),
        password: "hunter22".to_owned(),
        is_admin: None,
    };
    let json = serde_json::to_string(&body).unwrap();
    assert!(!json.contains("is_admin"));

    let body = CreateUserRequest { is_admin: Some(true), ..body };
    let json = serde_json::to_string(&body).unwrap();
    assert!(json.contains("\"is_admin\":true"));
}

#[test]
fn login_response_requires_token() {
    let json = r#"{"code": 200, "expire": "2024-07-01T00:00:00Z"}"#;
    assert!(serde_json::from_str::<LoginResponse>(json).is_err());
}
