//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided via Leptos context as `RwSignal<SessionState>` and consumed by
//! route guards, hooks, and user-aware components. This is the single source
//! of truth for identity: every permission/role check reads it, and every
//! check fails closed unless the session is authenticated.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashSet;

use crate::net::types::{Permission, Role, User};
use crate::state::permissions::effective_permissions;

/// Where the session is in its lifecycle.
///
/// `Unknown` covers the window between first render and the token
/// verification round-trip; pages treat it as "still loading" rather than
/// redirecting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// The current user plus their cached effective grant set.
///
/// The grant set is role defaults ∪ overrides, computed in [`establish`]
/// and dropped in [`clear`], so it can only go stale by re-authentication,
/// which recomputes it.
///
/// [`establish`]: SessionState::establish
/// [`clear`]: SessionState::clear
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub user: Option<User>,
    permissions: HashSet<Permission>,
}

impl SessionState {
    /// Transition to `Authenticated` with `user`, caching their effective
    /// permission set.
    pub fn establish(&mut self, user: User) {
        self.permissions = effective_permissions(user.role, &user.permission_overrides);
        self.user = Some(user);
        self.phase = SessionPhase::Authenticated;
    }

    /// Transition to `Unauthenticated`, dropping the user and grant cache.
    ///
    /// Unconditional: sign-out clears local state before the remote call
    /// resolves, so a failed signout request cannot resurrect the session.
    pub fn clear(&mut self) {
        self.user = None;
        self.permissions = HashSet::new();
        self.phase = SessionPhase::Unauthenticated;
    }

    /// True once the initial token verification has resolved either way.
    pub fn resolved(&self) -> bool {
        self.phase != SessionPhase::Unknown
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }

    /// True iff authenticated and the grant set contains `permission`.
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.is_authenticated() && self.permissions.contains(&permission)
    }

    /// True iff authenticated and at least one of `permissions` is granted.
    pub fn has_any_permission(&self, permissions: &[Permission]) -> bool {
        self.is_authenticated() && permissions.iter().any(|p| self.permissions.contains(p))
    }

    /// True iff authenticated and every one of `permissions` is granted.
    /// An empty list is vacuously satisfied (when authenticated).
    pub fn has_all_permissions(&self, permissions: &[Permission]) -> bool {
        self.is_authenticated() && permissions.iter().all(|p| self.permissions.contains(p))
    }

    /// True iff authenticated with exactly `role`.
    pub fn has_role(&self, role: Role) -> bool {
        self.is_authenticated() && self.user.as_ref().is_some_and(|u| u.role == role)
    }

    /// True iff authenticated and the user's role appears in `roles`.
    /// An empty list never matches.
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        self.is_authenticated()
            && self
                .user
                .as_ref()
                .is_some_and(|u| roles.contains(&u.role))
    }
}
