//! Project list state for the projects page.

use crate::net::types::Project;

/// Shared project list state backed by the REST API.
#[derive(Clone, Debug, Default)]
pub struct ProjectsState {
    pub items: Vec<Project>,
    pub loading: bool,
    pub error: Option<String>,
}
