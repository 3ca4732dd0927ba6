//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome and shared table controls while reading
//! shared state from Leptos context providers.

pub mod header;
pub mod notices;
pub mod pagination;
