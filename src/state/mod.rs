//! Shared application state provided through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! `session` is the identity source of truth; `permissions` is the pure
//! role/grant model it caches; the per-entity modules hold list state for
//! their pages; `ui` holds presentation-only chrome state.

pub mod diary;
pub mod notes;
pub mod permissions;
pub mod projects;
pub mod resources;
pub mod session;
pub mod todos;
pub mod ui;
