//! Resource-link list state for the resources page.

use crate::net::types::ResourceLink;

/// Shared resource list state backed by the REST API.
#[derive(Clone, Debug, Default)]
pub struct ResourcesState {
    pub items: Vec<ResourceLink>,
    pub loading: bool,
    pub error: Option<String>,
}
