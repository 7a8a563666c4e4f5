//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and grant-gated content while reading shared
//! state from Leptos context providers.

pub mod guards;
pub mod header;
