use super::*;

#[test]
fn notes_state_defaults() {
    let s = NotesState::default();
    assert!(s.items.is_empty());
    assert!(!s.loading);
    assert!(s.error.is_none());
}
