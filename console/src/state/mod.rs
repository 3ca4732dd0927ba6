//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `users`, `notice`, `ui`) so
//! individual components can depend on small focused models.

pub mod notice;
pub mod session;
pub mod ui;
pub mod users;
