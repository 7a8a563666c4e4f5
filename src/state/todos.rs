//! Todo-list state for the todos page.

#[cfg(test)]
#[path = "todos_test.rs"]
mod todos_test;

use crate::net::types::Todo;

/// Shared todo list state backed by the REST API.
#[derive(Clone, Debug, Default)]
pub struct TodosState {
    pub items: Vec<Todo>,
    pub loading: bool,
    pub error: Option<String>,
}

impl TodosState {
    /// Count of items not yet completed, shown in the todos page heading.
    pub fn open_count(&self) -> usize {
        self.items.iter().filter(|t| !t.completed).count()
    }
}
