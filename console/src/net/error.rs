//! Error taxonomy for the management API.
//!
//! ERROR HANDLING
//! ==============
//! Every failed call is folded into one of four categories before it reaches
//! page code. 401 means the session is gone and is handled by redirecting to
//! the login view rather than by a notification; all other categories carry
//! the text shown to the operator. Callers still receive the error itself so
//! forms can render inline detail.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

/// Fallback when the server supplies no message of its own.
pub const REQUEST_FAILED_MESSAGE: &str = "request failed";
/// Notification shown for transport-level failures.
pub const NETWORK_ERROR_MESSAGE: &str = "network error, please check your connection";
/// Notification shown when a request could not be constructed or sent.
pub const REQUEST_ERROR_MESSAGE: &str = "request could not be sent";

/// Failure categories for management API calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered 401; the session is no longer valid.
    SessionExpired,
    /// The server rejected the request; `message` is shown to the operator.
    Server { status: u16, message: String },
    /// No usable response arrived (connection failure or timeout).
    Network,
    /// The request could not be constructed or sent.
    Request(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SessionExpired => write!(f, "session expired, please sign in again"),
            Self::Server { message, .. } => write!(f, "{message}"),
            Self::Network => write!(f, "network error"),
            Self::Request(detail) => write!(f, "request error: {detail}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Map a non-success HTTP response to its error category.
///
/// The server-supplied `message` field wins when present; 401 always means
/// the session is gone, whatever the body says.
pub fn classify_response(status: u16, body: &str) -> ApiError {
    if status == 401 {
        return ApiError::SessionExpired;
    }
    ApiError::Server {
        status,
        message: server_message(body),
    }
}

/// Notification text for an error, or `None` when nothing should be shown
/// (session expiry redirects instead of notifying).
pub fn notification_text(error: &ApiError) -> Option<String> {
    match error {
        ApiError::SessionExpired => None,
        ApiError::Server { message, .. } => Some(message.clone()),
        ApiError::Network => Some(NETWORK_ERROR_MESSAGE.to_owned()),
        ApiError::Request(_) => Some(REQUEST_ERROR_MESSAGE.to_owned()),
    }
}

// An empty message counts as absent; a blank toast helps nobody.
fn server_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(serde_json::Value::as_str)
                .filter(|message| !message.is_empty())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| REQUEST_FAILED_MESSAGE.to_owned())
}
