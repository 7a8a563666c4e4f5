use super::*;

#[test]
fn permission_displays_as_resource_colon_action() {
    let perm = Permission::new(Resource::Note, Action::Create);
    assert_eq!(perm.to_string(), "note:create");
    let perm = Permission::new(Resource::ResourceLink, Action::Delete);
    assert_eq!(perm.to_string(), "resource:delete");
}

#[test]
fn permission_parses_every_wire_form() {
    for resource in Resource::ALL {
        for action in Action::ALL {
            let wire = format!("{}:{}", resource.as_str(), action.as_str());
            assert_eq!(wire.parse(), Ok(Permission::new(resource, action)));
        }
    }
}

#[test]
fn permission_rejects_unknown_strings() {
    assert!("note".parse::<Permission>().is_err());
    assert!("note:publish".parse::<Permission>().is_err());
    assert!("wiki:read".parse::<Permission>().is_err());
    assert!("".parse::<Permission>().is_err());
}

#[test]
fn permission_serde_uses_wire_strings() {
    let perm = Permission::new(Resource::User, Action::Delete);
    assert_eq!(serde_json::to_string(&perm).unwrap(), "\"user:delete\"");
    let parsed: Permission = serde_json::from_str("\"todo:update\"").unwrap();
    assert_eq!(parsed, Permission::new(Resource::Todo, Action::Update));
}

#[test]
fn role_serde_uses_lowercase_strings() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    let parsed: Role = serde_json::from_str("\"guest\"").unwrap();
    assert_eq!(parsed, Role::Guest);
}

#[test]
fn user_defaults_missing_fields() {
    let user: User = serde_json::from_str(
        r#"{"id":"u1","name":"Ada","email":"ada@example.com"}"#,
    )
    .unwrap();
    assert!(!user.email_verified);
    assert_eq!(user.role, Role::User);
    assert!(user.permission_overrides.is_empty());
}

#[test]
fn user_parses_role_and_overrides() {
    let user: User = serde_json::from_str(
        r#"{
            "id": "u2",
            "name": "Grace",
            "email": "grace@example.com",
            "email_verified": true,
            "role": "guest",
            "permission_overrides": ["note:create", "user:delete"]
        }"#,
    )
    .unwrap();
    assert_eq!(user.role, Role::Guest);
    assert!(user.email_verified);
    assert_eq!(
        user.permission_overrides,
        vec![
            Permission::new(Resource::Note, Action::Create),
            Permission::new(Resource::User, Action::Delete),
        ]
    );
}

#[test]
fn user_rejects_unknown_override_strings() {
    let result: Result<User, _> = serde_json::from_str(
        r#"{"id":"u3","name":"X","email":"x@example.com","permission_overrides":["note:fly"]}"#,
    );
    assert!(result.is_err());
}

#[test]
fn todo_defaults_completed_to_false() {
    let todo: Todo = serde_json::from_str(r#"{"id":"t1","title":"Ship it"}"#).unwrap();
    assert!(!todo.completed);
    assert!(todo.due_date.is_none());
    assert!(todo.priority.is_none());
}
