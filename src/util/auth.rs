//! Session hooks and shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior,
//! and permission-aware components read the session through these derived
//! signals rather than touching the grant model directly. Every hook fails
//! closed: without an authenticated session, all checks are false.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::{Permission, Role};
use crate::state::session::SessionState;

/// The session context handle. Panics if called outside the `App` tree,
/// which is a wiring bug rather than a runtime condition.
pub fn use_session() -> RwSignal<SessionState> {
    expect_context::<RwSignal<SessionState>>()
}

/// Derived signal: the current user holds `permission`.
pub fn use_permission(permission: Permission) -> Signal<bool> {
    let session = use_session();
    Signal::derive(move || session.get().has_permission(permission))
}

/// Derived signal: the current user holds at least one of `permissions`.
pub fn use_any_permission(permissions: Vec<Permission>) -> Signal<bool> {
    let session = use_session();
    Signal::derive(move || session.get().has_any_permission(&permissions))
}

/// Derived signal: the current user holds every one of `permissions`.
pub fn use_all_permissions(permissions: Vec<Permission>) -> Signal<bool> {
    let session = use_session();
    Signal::derive(move || session.get().has_all_permissions(&permissions))
}

/// Derived signal: the current user has exactly `role`.
pub fn use_role(role: Role) -> Signal<bool> {
    let session = use_session();
    Signal::derive(move || session.get().has_role(role))
}

/// Derived signal: the current user's role appears in `roles`.
/// An empty list never matches.
pub fn use_any_role(roles: Vec<Role>) -> Signal<bool> {
    let session = use_session();
    Signal::derive(move || session.get().has_any_role(&roles))
}

/// Redirect to `/login` whenever the session has resolved and no user is
/// present. The `Unknown` phase is left alone so the token-verification
/// round-trip can finish before any redirect fires.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let state = session.get();
        if state.resolved() && !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });
}
