//! Declarative permission/role gates for view content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards are thin wrappers over the session hooks in [`crate::util::auth`]:
//! they render their children when the check passes and an optional fallback
//! (default: nothing) when it does not. They hold no state of their own and
//! re-evaluate whenever the session context changes. Authorization denial
//! here is a rendering branch, never an error.

use leptos::prelude::*;

use crate::net::types::{Permission, Role};
use crate::util::auth::{
    use_all_permissions, use_any_permission, use_any_role, use_permission, use_role,
};

/// Render children iff the current user holds `permission`.
#[component]
pub fn PermissionGuard(
    /// Capability required to render the children.
    permission: Permission,
    /// Rendered when the check fails.
    #[prop(optional, into)]
    fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let granted = use_permission(permission);
    view! {
        <Show when=move || granted.get() fallback=fallback>
            {children()}
        </Show>
    }
}

/// Render children iff the current user holds at least one of `permissions`.
#[component]
pub fn AnyPermissionGuard(
    /// Capabilities, any one of which unlocks the children.
    permissions: Vec<Permission>,
    /// Rendered when the check fails.
    #[prop(optional, into)]
    fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let granted = use_any_permission(permissions);
    view! {
        <Show when=move || granted.get() fallback=fallback>
            {children()}
        </Show>
    }
}

/// Render children iff the current user holds every one of `permissions`.
#[component]
pub fn AllPermissionsGuard(
    /// Capabilities that must all be held to unlock the children.
    permissions: Vec<Permission>,
    /// Rendered when the check fails.
    #[prop(optional, into)]
    fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let granted = use_all_permissions(permissions);
    view! {
        <Show when=move || granted.get() fallback=fallback>
            {children()}
        </Show>
    }
}

/// Render children iff the current user has exactly `role`.
#[component]
pub fn RoleGuard(
    /// Role required to render the children.
    role: Role,
    /// Rendered when the check fails.
    #[prop(optional, into)]
    fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let granted = use_role(role);
    view! {
        <Show when=move || granted.get() fallback=fallback>
            {children()}
        </Show>
    }
}

/// Render children iff the current user's role appears in `roles`.
/// An empty list never renders the children.
#[component]
pub fn AnyRoleGuard(
    /// Roles, any one of which unlocks the children.
    roles: Vec<Role>,
    /// Rendered when the check fails.
    #[prop(optional, into)]
    fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let granted = use_any_role(roles);
    view! {
        <Show when=move || granted.get() fallback=fallback>
            {children()}
        </Show>
    }
}
