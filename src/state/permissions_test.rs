use super::*;

fn perm(resource: Resource, action: Action) -> Permission {
    Permission::new(resource, action)
}

#[test]
fn admin_defaults_cover_every_resource_action_pair() {
    let grants = defaults_for(Role::Admin);
    assert_eq!(grants.len(), Resource::ALL.len() * Action::ALL.len());
    for resource in Resource::ALL {
        for action in Action::ALL {
            assert!(grants.contains(&perm(resource, action)));
        }
    }
}

#[test]
fn user_defaults_grant_crud_on_owned_resources() {
    let grants = defaults_for(Role::User);
    for action in Action::ALL {
        assert!(grants.contains(&perm(Resource::Note, action)));
        assert!(grants.contains(&perm(Resource::Todo, action)));
        assert!(grants.contains(&perm(Resource::Diary, action)));
        assert!(grants.contains(&perm(Resource::Project, action)));
        assert!(grants.contains(&perm(Resource::ResourceLink, action)));
    }
}

#[test]
fn user_defaults_exclude_user_admin_actions() {
    let grants = defaults_for(Role::User);
    assert!(grants.contains(&perm(Resource::User, Action::Read)));
    assert!(grants.contains(&perm(Resource::User, Action::Update)));
    assert!(!grants.contains(&perm(Resource::User, Action::Create)));
    assert!(!grants.contains(&perm(Resource::User, Action::Delete)));
}

#[test]
fn guest_defaults_are_read_only() {
    let grants = defaults_for(Role::Guest);
    assert!(grants.contains(&perm(Resource::Note, Action::Read)));
    assert!(grants.contains(&perm(Resource::Project, Action::Read)));
    assert!(grants.contains(&perm(Resource::ResourceLink, Action::Read)));
    for grant in &grants {
        assert_eq!(grant.action, Action::Read);
    }
    assert!(!grants.contains(&perm(Resource::Diary, Action::Read)));
}

#[test]
fn has_permission_matches_defaults_union_overrides() {
    for role in [Role::Admin, Role::User, Role::Guest] {
        let defaults = defaults_for(role);
        for resource in Resource::ALL {
            for action in Action::ALL {
                let p = perm(resource, action);
                assert_eq!(has_permission(role, p, &[]), defaults.contains(&p));
            }
        }
    }
}

#[test]
fn admin_holds_user_delete_but_guest_does_not() {
    let user_delete = perm(Resource::User, Action::Delete);
    assert!(has_permission(Role::Admin, user_delete, &[]));
    assert!(!has_permission(Role::Guest, user_delete, &[]));
}

#[test]
fn override_grants_beyond_role_defaults() {
    let user_delete = perm(Resource::User, Action::Delete);
    assert!(!has_permission(Role::User, user_delete, &[]));
    assert!(has_permission(Role::User, user_delete, &[user_delete]));
}

#[test]
fn effective_permissions_is_defaults_union_overrides() {
    let user_delete = perm(Resource::User, Action::Delete);
    let effective = effective_permissions(Role::Guest, &[user_delete]);
    for grant in defaults_for(Role::Guest) {
        assert!(effective.contains(&grant));
    }
    assert!(effective.contains(&user_delete));
    assert_eq!(effective.len(), defaults_for(Role::Guest).len() + 1);
}

#[test]
fn effective_permissions_dedupes_redundant_overrides() {
    let note_read = perm(Resource::Note, Action::Read);
    let effective = effective_permissions(Role::Guest, &[note_read]);
    assert_eq!(effective.len(), defaults_for(Role::Guest).len());
}
