//! Static role/permission model.
//!
//! DESIGN
//! ======
//! Grants are a pure function of (role, overrides): the effective set is the
//! role's default grants unioned with the user's explicit overrides. There is
//! no revocation — overrides only ever add. Checks against undefined
//! role/permission combinations cannot occur because both sides are closed
//! enumerations.

#[cfg(test)]
#[path = "permissions_test.rs"]
mod permissions_test;

use std::collections::HashSet;

use crate::net::types::{Action, Permission, Resource, Role};

/// Resources a regular user gets full CRUD on by default.
const USER_OWNED: [Resource; 5] = [
    Resource::Note,
    Resource::Todo,
    Resource::Diary,
    Resource::Project,
    Resource::ResourceLink,
];

/// Resources a guest may read.
const GUEST_READABLE: [Resource; 3] = [Resource::Note, Resource::Project, Resource::ResourceLink];

/// Default grants for a role.
///
/// Admin: every action on every resource, including user administration.
/// User: full CRUD on their productivity data plus read/update on their own
/// user record. Guest: read-only access to shared content.
pub fn defaults_for(role: Role) -> Vec<Permission> {
    match role {
        Role::Admin => Resource::ALL
            .into_iter()
            .flat_map(|resource| {
                Action::ALL
                    .into_iter()
                    .map(move |action| Permission::new(resource, action))
            })
            .collect(),
        Role::User => {
            let mut grants: Vec<Permission> = USER_OWNED
                .into_iter()
                .flat_map(|resource| {
                    Action::ALL
                        .into_iter()
                        .map(move |action| Permission::new(resource, action))
                })
                .collect();
            grants.push(Permission::new(Resource::User, Action::Read));
            grants.push(Permission::new(Resource::User, Action::Update));
            grants
        }
        Role::Guest => GUEST_READABLE
            .into_iter()
            .map(|resource| Permission::new(resource, Action::Read))
            .collect(),
    }
}

/// True iff `permission` is in `role`'s default set or listed in `overrides`.
///
/// Pure and total over the closed enumerations; no failure modes.
pub fn has_permission(role: Role, permission: Permission, overrides: &[Permission]) -> bool {
    overrides.contains(&permission) || defaults_for(role).contains(&permission)
}

/// The effective grant set for a session: role defaults ∪ overrides.
///
/// Computed once per session load and cached on the session state, so hooks
/// and guards do set lookups rather than re-deriving the union per check.
pub fn effective_permissions(role: Role, overrides: &[Permission]) -> HashSet<Permission> {
    let mut set: HashSet<Permission> = defaults_for(role).into_iter().collect();
    set.extend(overrides.iter().copied());
    set
}
