//! HTTP access layer for the management API.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`, funneled through one
//! request core that attaches the bearer token, enforces the 10 second
//! timeout, and classifies failures. Native builds: stubs returning
//! `ApiError::Request` so host-side tests can drive the failure paths.
//!
//! DESIGN
//! ======
//! `ApiClient` owns no session state. The token is read through an injected
//! accessor on every call, and notifications plus 401 handling go through
//! injected hooks, so this layer has no compile-time dependency on the
//! session store that feeds it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use super::error::{self, ApiError};
use super::types::{
    AdminChangePasswordRequest, AuthLogPayload, ChangePasswordRequest, CreateUserRequest,
    LoginRequest, LoginResponse, Stats, User, UserListPayload,
};
#[cfg(feature = "csr")]
use super::types::{Ack, Envelope};
#[cfg(feature = "csr")]
use gloo_net::http::Method;

/// Outbound request timeout in milliseconds.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Zero-argument accessor yielding the current bearer token.
pub type TokenSource = Arc<dyn Fn() -> String + Send + Sync>;
/// Sink for operator-facing notification text.
pub type Notifier = Arc<dyn Fn(String) + Send + Sync>;
/// Hook invoked when the server answers 401.
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// Shared handle to the management API. Cheap to clone; all injected state
/// sits behind `Arc`, which also keeps the client usable from Leptos context.
#[derive(Clone)]
#[cfg_attr(not(any(test, feature = "csr")), allow(dead_code))]
pub struct ApiClient {
    base_path: String,
    token_source: TokenSource,
    notify: Notifier,
    on_unauthorized: UnauthorizedHook,
}

#[cfg(any(test, feature = "csr"))]
fn bearer_header(token: &str) -> Option<String> {
    if token.is_empty() {
        None
    } else {
        Some(format!("Bearer {token}"))
    }
}

#[cfg(any(test, feature = "csr"))]
fn users_query(page: u64, limit: u64) -> String {
    format!("/admin/users?page={page}&limit={limit}")
}

#[cfg(any(test, feature = "csr"))]
fn user_password_endpoint(user_id: u64) -> String {
    format!("/admin/users/{user_id}/password")
}

#[cfg(any(test, feature = "csr"))]
fn user_ban_endpoint(user_id: u64) -> String {
    format!("/admin/users/{user_id}/ban")
}

#[cfg(any(test, feature = "csr"))]
fn user_endpoint(user_id: u64) -> String {
    format!("/admin/users/{user_id}")
}

#[cfg(any(test, feature = "csr"))]
fn auth_logs_query(page: u64, limit: u64, username: Option<&str>) -> String {
    let mut query = format!("/admin/auth-logs?page={page}&limit={limit}");
    if let Some(username) = username {
        if !username.is_empty() {
            query.push_str("&username=");
            query.push_str(&encode_query_value(username));
        }
    }
    query
}

// RFC 3986 unreserved characters pass through, everything else is escaped.
#[cfg(any(test, feature = "csr"))]
fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> ApiError {
    ApiError::Request("not available outside the browser".to_owned())
}

impl ApiClient {
    /// Build a client rooted at `base_path`, reading the bearer token
    /// through `token_source` on every call.
    pub fn new(base_path: String, token_source: TokenSource) -> Self {
        Self {
            base_path,
            token_source,
            notify: Arc::new(|_| {}),
            on_unauthorized: Arc::new(|| {}),
        }
    }

    /// Install the notification hook invoked with operator-facing error text.
    #[must_use]
    pub fn with_notifier(mut self, notify: Notifier) -> Self {
        self.notify = notify;
        self
    }

    /// Install the hook invoked when the server reports the session invalid.
    #[must_use]
    pub fn with_unauthorized_hook(mut self, hook: UnauthorizedHook) -> Self {
        self.on_unauthorized = hook;
        self
    }

    /// Root path this client prefixes onto every endpoint.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    // Session expiry invalidates the session and redirects instead of
    // notifying; every other category surfaces its text once, here.
    #[cfg_attr(not(any(test, feature = "csr")), allow(dead_code))]
    fn report(&self, error: &ApiError) {
        if matches!(error, ApiError::SessionExpired) {
            (self.on_unauthorized)();
            return;
        }
        if let Some(text) = error::notification_text(error) {
            (self.notify)(text);
        }
    }

    #[cfg_attr(not(any(test, feature = "csr")), allow(dead_code))]
    fn fail(&self, error: ApiError) -> ApiError {
        self.report(&error);
        error
    }

    /// One round trip: bearer header, timeout race, status classification.
    #[cfg(feature = "csr")]
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<gloo_net::http::Response, ApiError> {
        use futures::future::Either;

        let url = format!("{}{}", self.base_path, path);
        let mut builder = gloo_net::http::RequestBuilder::new(&url).method(method);
        if let Some(value) = bearer_header(&(self.token_source)()) {
            builder = builder.header("Authorization", &value);
        }

        let request = match body {
            Some(json) => builder.json(json),
            None => builder.build(),
        }
        .map_err(|e| self.fail(ApiError::Request(e.to_string())))?;

        let send = request.send();
        let timeout = gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS);
        futures::pin_mut!(send);
        futures::pin_mut!(timeout);

        let response = match futures::future::select(send, timeout).await {
            Either::Left((result, _)) => result.map_err(|_| self.fail(ApiError::Network))?,
            Either::Right(((), _)) => return Err(self.fail(ApiError::Network)),
        };

        if !response.ok() {
            let status = response.status();
            let body_text = response.text().await.unwrap_or_default();
            return Err(self.fail(error::classify_response(status, &body_text)));
        }
        Ok(response)
    }

    #[cfg(feature = "csr")]
    async fn parse<T: serde::de::DeserializeOwned>(
        &self,
        response: gloo_net::http::Response,
    ) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| self.fail(ApiError::Request(e.to_string())))
    }

    #[cfg(feature = "csr")]
    fn encode<T: serde::Serialize>(&self, body: &T) -> Result<serde_json::Value, ApiError> {
        serde_json::to_value(body).map_err(|e| self.fail(ApiError::Request(e.to_string())))
    }

    /// Exchange credentials for a bearer token via `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] when the credentials are rejected
    /// or the request fails.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = self.encode(credentials)?;
            let response = self.send(Method::POST, "/auth/login", Some(&body)).await?;
            self.parse(response).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(unavailable())
        }
    }

    /// Renew the current token via `POST /auth/refresh`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] on failure.
    pub async fn refresh_token(&self) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let response = self.send(Method::POST, "/auth/refresh", None).await?;
            self.parse(response).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(unavailable())
        }
    }

    /// Fetch the signed-in operator's profile via `GET /user/profile`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] on failure; a 401 here is the
    /// usual sign of an expired persisted token.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        #[cfg(feature = "csr")]
        {
            let response = self.send(Method::GET, "/user/profile", None).await?;
            let envelope: Envelope<User> = self.parse(response).await?;
            Ok(envelope.data)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(unavailable())
        }
    }

    /// Change the caller's own password via `PUT /user/change-password`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] on failure, including the server's
    /// rejection of a wrong old password.
    pub async fn change_password(&self, body: &ChangePasswordRequest) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let json = self.encode(body)?;
            let response = self
                .send(Method::PUT, "/user/change-password", Some(&json))
                .await?;
            let _ack: Ack = self.parse(response).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = body;
            Err(unavailable())
        }
    }

    /// Fetch one page of managed accounts via `GET /admin/users`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] on failure.
    pub async fn users(&self, page: u64, limit: u64) -> Result<UserListPayload, ApiError> {
        #[cfg(feature = "csr")]
        {
            let response = self.send(Method::GET, &users_query(page, limit), None).await?;
            let envelope: Envelope<UserListPayload> = self.parse(response).await?;
            Ok(envelope.data)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (page, limit);
            Err(unavailable())
        }
    }

    /// Create an account via `POST /admin/users`, returning the stored row.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] on failure, including username or
    /// email conflicts.
    pub async fn create_user(&self, body: &CreateUserRequest) -> Result<User, ApiError> {
        #[cfg(feature = "csr")]
        {
            let json = self.encode(body)?;
            let response = self.send(Method::POST, "/admin/users", Some(&json)).await?;
            let envelope: Envelope<User> = self.parse(response).await?;
            Ok(envelope.data)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = body;
            Err(unavailable())
        }
    }

    /// Force-set another account's password via `PUT /admin/users/{id}/password`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] on failure.
    pub async fn admin_change_password(
        &self,
        user_id: u64,
        body: &AdminChangePasswordRequest,
    ) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let json = self.encode(body)?;
            let response = self
                .send(Method::PUT, &user_password_endpoint(user_id), Some(&json))
                .await?;
            let _ack: Ack = self.parse(response).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (user_id, body);
            Err(unavailable())
        }
    }

    /// Flip an account's ban flag via `PUT /admin/users/{id}/ban`, returning
    /// the updated row.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] on failure; the server refuses to
    /// ban the calling account.
    pub async fn toggle_user_ban(&self, user_id: u64) -> Result<User, ApiError> {
        #[cfg(feature = "csr")]
        {
            let response = self.send(Method::PUT, &user_ban_endpoint(user_id), None).await?;
            let envelope: Envelope<User> = self.parse(response).await?;
            Ok(envelope.data)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = user_id;
            Err(unavailable())
        }
    }

    /// Remove an account via `DELETE /admin/users/{id}`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] on failure; the server refuses to
    /// delete the calling account.
    pub async fn delete_user(&self, user_id: u64) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let response = self.send(Method::DELETE, &user_endpoint(user_id), None).await?;
            let _ack: Ack = self.parse(response).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = user_id;
            Err(unavailable())
        }
    }

    /// Fetch the caller-scoped counters via `GET /user/stats`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] on failure.
    pub async fn stats(&self) -> Result<Stats, ApiError> {
        #[cfg(feature = "csr")]
        {
            let response = self.send(Method::GET, "/user/stats", None).await?;
            let envelope: Envelope<Stats> = self.parse(response).await?;
            Ok(envelope.data)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(unavailable())
        }
    }

    /// Fetch the instance-wide counters via `GET /admin/stats`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] on failure.
    pub async fn admin_stats(&self) -> Result<Stats, ApiError> {
        #[cfg(feature = "csr")]
        {
            let response = self.send(Method::GET, "/admin/stats", None).await?;
            let envelope: Envelope<Stats> = self.parse(response).await?;
            Ok(envelope.data)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(unavailable())
        }
    }

    /// Query the audit log via `GET /admin/auth-logs`, optionally filtered
    /// to one username.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] on failure.
    pub async fn auth_logs(
        &self,
        page: u64,
        limit: u64,
        username: Option<&str>,
    ) -> Result<AuthLogPayload, ApiError> {
        #[cfg(feature = "csr")]
        {
            let response = self
                .send(Method::GET, &auth_logs_query(page, limit, username), None)
                .await?;
            let envelope: Envelope<AuthLogPayload> = self.parse(response).await?;
            Ok(envelope.data)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (page, limit, username);
            Err(unavailable())
        }
    }
}
