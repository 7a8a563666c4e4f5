//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (session gating, list loading,
//! dialog state) and delegates shared rendering to `components`.

pub mod dashboard;
pub mod diary;
pub mod forgot_password;
pub mod login;
pub mod notes;
pub mod projects;
pub mod register;
pub mod reset_password;
pub mod resources;
pub mod todos;
pub mod verify_email;
