use super::*;
use crate::net::types::{Action, Resource};

fn test_user(role: Role, overrides: Vec<Permission>) -> User {
    User {
        id: "u1".to_owned(),
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        email_verified: true,
        role,
        permission_overrides: overrides,
    }
}

const NOTE_READ: Permission = Permission::new(Resource::Note, Action::Read);
const NOTE_CREATE: Permission = Permission::new(Resource::Note, Action::Create);
const USER_DELETE: Permission = Permission::new(Resource::User, Action::Delete);

#[test]
fn default_phase_is_unknown_and_unresolved() {
    let session = SessionState::default();
    assert_eq!(session.phase, SessionPhase::Unknown);
    assert!(!session.resolved());
    assert!(!session.is_authenticated());
}

#[test]
fn unknown_session_fails_every_check() {
    let session = SessionState::default();
    assert!(!session.has_permission(NOTE_READ));
    assert!(!session.has_any_permission(&[NOTE_READ, NOTE_CREATE]));
    assert!(!session.has_all_permissions(&[]));
    assert!(!session.has_role(Role::Admin));
    assert!(!session.has_any_role(&[Role::Admin, Role::User, Role::Guest]));
}

#[test]
fn cleared_session_fails_every_check() {
    let mut session = SessionState::default();
    session.establish(test_user(Role::Admin, vec![]));
    session.clear();
    assert_eq!(session.phase, SessionPhase::Unauthenticated);
    assert!(session.resolved());
    assert!(session.user.is_none());
    assert!(!session.has_permission(NOTE_READ));
    assert!(!session.has_role(Role::Admin));
}

#[test]
fn establish_authenticates_and_exposes_user() {
    let mut session = SessionState::default();
    session.establish(test_user(Role::User, vec![]));
    assert_eq!(session.phase, SessionPhase::Authenticated);
    assert!(session.resolved());
    assert_eq!(session.user.as_ref().map(|u| u.name.as_str()), Some("Ada"));
}

#[test]
fn checks_reflect_role_defaults() {
    let mut session = SessionState::default();
    session.establish(test_user(Role::Guest, vec![]));
    assert!(session.has_permission(NOTE_READ));
    assert!(!session.has_permission(NOTE_CREATE));
    assert!(!session.has_permission(USER_DELETE));
}

#[test]
fn checks_reflect_overrides() {
    let mut session = SessionState::default();
    session.establish(test_user(Role::User, vec![USER_DELETE]));
    assert!(session.has_permission(USER_DELETE));
}

#[test]
fn reauthentication_recomputes_the_grant_cache() {
    let mut session = SessionState::default();
    session.establish(test_user(Role::User, vec![USER_DELETE]));
    assert!(session.has_permission(USER_DELETE));
    session.clear();
    session.establish(test_user(Role::User, vec![]));
    assert!(!session.has_permission(USER_DELETE));
    assert!(session.has_permission(NOTE_CREATE));
}

#[test]
fn any_permission_requires_one_match() {
    let mut session = SessionState::default();
    session.establish(test_user(Role::Guest, vec![]));
    assert!(session.has_any_permission(&[NOTE_CREATE, NOTE_READ]));
    assert!(!session.has_any_permission(&[NOTE_CREATE, USER_DELETE]));
    assert!(!session.has_any_permission(&[]));
}

#[test]
fn all_permissions_requires_every_match() {
    let mut session = SessionState::default();
    session.establish(test_user(Role::User, vec![]));
    assert!(session.has_all_permissions(&[NOTE_READ, NOTE_CREATE]));
    assert!(!session.has_all_permissions(&[NOTE_READ, USER_DELETE]));
    // Vacuously true for an authenticated session.
    assert!(session.has_all_permissions(&[]));
}

#[test]
fn role_checks_match_single_assigned_role() {
    let mut session = SessionState::default();
    session.establish(test_user(Role::Admin, vec![]));
    assert!(session.has_role(Role::Admin));
    assert!(!session.has_role(Role::User));
    assert!(session.has_any_role(&[Role::User, Role::Admin]));
    assert!(!session.has_any_role(&[Role::User, Role::Guest]));
}

#[test]
fn empty_role_list_never_matches() {
    let mut session = SessionState::default();
    session.establish(test_user(Role::Admin, vec![]));
    assert!(!session.has_any_role(&[]));
}
