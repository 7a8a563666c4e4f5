//! Diary-entry list state for the diary page.

use crate::net::types::DiaryEntry;

/// Shared diary list state backed by the REST API.
#[derive(Clone, Debug, Default)]
pub struct DiaryState {
    pub items: Vec<DiaryEntry>,
    pub loading: bool,
    pub error: Option<String>,
}
