//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`session`,
//! entity lists) so rendering controls can evolve independently of API data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for theming.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}
