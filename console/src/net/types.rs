//! Wire-format DTOs for the management API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads field for field so serde
//! handles envelope unwrapping and page code never touches raw JSON. The
//! server wraps every success body in `{ code, data }` (or `{ code, message }`
//! for acknowledgement-only endpoints); `code` duplicates the HTTP status and
//! is ignored after deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Credentials submitted to `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token grant returned by `POST /auth/login` and `POST /auth/refresh`.
///
/// Unlike the other endpoints this body is flat, not enveloped; the auth
/// middleware on the server writes it directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub code: i64,
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Token expiry timestamp (RFC 3339), informational only.
    pub expire: String,
}

/// A managed account as returned by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub banned: bool,
    /// Server-issued creation timestamp, treated as opaque text.
    pub created_at: String,
    /// Server-issued update timestamp, treated as opaque text.
    pub updated_at: String,
}

/// Body for `POST /admin/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

/// Body for `PUT /user/change-password`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// Body for `PUT /admin/users/{id}/password`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminChangePasswordRequest {
    pub new_password: String,
}

/// Pagination block attached to list payloads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

impl Pagination {
    /// Number of pages implied by `total`, never below one.
    pub fn page_count(&self) -> u64 {
        let limit = self.limit.max(1);
        self.total.div_ceil(limit).max(1)
    }
}

/// Payload of `GET /admin/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListPayload {
    /// The server emits `null` instead of `[]` for an empty page.
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub users: Vec<User>,
    pub pagination: Pagination,
}

/// Aggregate counters from `/user/stats` and `/admin/stats`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_users: i64,
    pub active_users: i64,
    pub banned_users: i64,
    pub auth_count: i64,
}

/// One authentication attempt recorded by the RADIUS endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthLog {
    pub id: u64,
    pub username: String,
    /// `"authorize"` or `"authenticate"`.
    pub auth_type: String,
    pub success: bool,
    pub ip_address: String,
    #[serde(default)]
    pub user_agent: String,
    /// MAC address of the requesting device, when the NAS reported one.
    #[serde(default)]
    pub device_mac: Option<String>,
    /// SSID the device attempted to join, when reported.
    #[serde(default)]
    pub target_ssid: Option<String>,
    /// Server-issued timestamp, treated as opaque text.
    pub created_at: String,
}

/// Payload of `GET /admin/auth-logs`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthLogPayload {
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub logs: Vec<AuthLog>,
    pub pagination: Pagination,
}

/// Success envelope `{ code, data }` around payload-bearing responses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    pub data: T,
}

/// Success envelope for endpoints that return only a confirmation message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

fn deserialize_null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
