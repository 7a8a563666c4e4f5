use super::*;

#[test]
fn toggled_flips_completion_and_keeps_fields() {
    let todo = Todo {
        id: "t1".to_owned(),
        title: "Water plants".to_owned(),
        completed: false,
        due_date: Some("2026-09-01".to_owned()),
        priority: Some("low".to_owned()),
    };
    let next = toggled(&todo);
    assert!(next.completed);
    assert_eq!(next.id, todo.id);
    assert_eq!(next.title, todo.title);
    assert_eq!(next.due_date, todo.due_date);
    assert!(!toggled(&next).completed);
}
