//! Networking modules for the HTTP API boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles auth/session REST calls, the `api_*` modules cover one
//! entity collection each, and `types` defines the shared wire schema.
//! Everything speaks credentialed (cookie) requests; the client never
//! handles bearer tokens directly.

pub mod api;
pub mod api_diary;
pub mod api_notes;
pub mod api_projects;
pub mod api_resources;
pub mod api_todos;
pub mod types;
