//! Networking layer shared by every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP client, `error` the failure taxonomy and its
//! operator-facing text, `types` the wire schema shared with the RADIUS
//! management server.

pub mod api;
pub mod error;
pub mod types;
