//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Every signed-in page installs the unauthenticated
//! redirect on mount.

pub mod auth_logs;
pub mod dashboard;
pub mod login;
pub mod profile;
pub mod users;
