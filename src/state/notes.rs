//! Note-list state for the notes page.
//!
//! DESIGN
//! ======
//! Each entity list keeps its own items/loading/error triple so pages stay
//! independent: a failed notes fetch never blanks the todos view.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

use crate::net::types::Note;

/// Shared note list state backed by the REST API.
#[derive(Clone, Debug, Default)]
pub struct NotesState {
    pub items: Vec<Note>,
    pub loading: bool,
    pub error: Option<String>,
}
