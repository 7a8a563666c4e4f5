use super::*;

fn todo(id: &str, completed: bool) -> Todo {
    Todo {
        id: id.to_owned(),
        title: format!("todo {id}"),
        completed,
        due_date: None,
        priority: None,
    }
}

#[test]
fn todos_state_defaults() {
    let s = TodosState::default();
    assert!(s.items.is_empty());
    assert!(!s.loading);
    assert!(s.error.is_none());
    assert_eq!(s.open_count(), 0);
}

#[test]
fn open_count_ignores_completed_items() {
    let s = TodosState {
        items: vec![todo("a", false), todo("b", true), todo("c", false)],
        ..TodosState::default()
    };
    assert_eq!(s.open_count(), 2);
}
