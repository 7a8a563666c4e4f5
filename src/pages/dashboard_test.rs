use super::*;

#[test]
fn role_labels_are_human_readable() {
    assert_eq!(role_label(Role::Admin), "admin");
    assert_eq!(role_label(Role::User), "member");
    assert_eq!(role_label(Role::Guest), "guest");
}
