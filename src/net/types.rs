//! Shared wire DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the API server's JSON payloads so serde round-trips
//! stay lossless. Roles and permissions are closed enumerations rather than
//! free-form strings; permissions cross the wire as `"resource:action"`
//! strings and are parsed into typed values at the deserialization edge.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Coarse-grained identity classification. Exactly one per user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, including user administration.
    Admin,
    /// Regular account with full access to their own productivity data.
    #[default]
    User,
    /// Read-only visitor.
    Guest,
}

/// Resource families that permissions range over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Note,
    Todo,
    Diary,
    Project,
    ResourceLink,
    User,
}

impl Resource {
    /// Wire name used in `"resource:action"` permission strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Todo => "todo",
            Self::Diary => "diary",
            Self::Project => "project",
            Self::ResourceLink => "resource",
            Self::User => "user",
        }
    }

    /// All resource families, in wire order.
    pub const ALL: [Self; 6] = [
        Self::Note,
        Self::Todo,
        Self::Diary,
        Self::Project,
        Self::ResourceLink,
        Self::User,
    ];
}

/// CRUD actions a permission can grant on a resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

impl Action {
    /// Wire name used in `"resource:action"` permission strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// All actions, in wire order.
    pub const ALL: [Self; 4] = [Self::Create, Self::Read, Self::Update, Self::Delete];
}

/// A fine-grained capability: one action on one resource family.
///
/// Serialized as `"resource:action"` (e.g. `"note:create"`), matching the
/// override arrays the API attaches to user records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Permission {
    pub resource: Resource,
    pub action: Action,
}

impl Permission {
    pub const fn new(resource: Resource, action: Action) -> Self {
        Self { resource, action }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource.as_str(), self.action.as_str())
    }
}

/// Error produced when a permission string does not match the closed set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsePermissionError(pub String);

impl fmt::Display for ParsePermissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown permission: {}", self.0)
    }
}

impl FromStr for Permission {
    type Err = ParsePermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((resource_str, action_str)) = s.split_once(':') else {
            return Err(ParsePermissionError(s.to_owned()));
        };
        let resource = Resource::ALL
            .into_iter()
            .find(|r| r.as_str() == resource_str)
            .ok_or_else(|| ParsePermissionError(s.to_owned()))?;
        let action = Action::ALL
            .into_iter()
            .find(|a| a.as_str() == action_str)
            .ok_or_else(|| ParsePermissionError(s.to_owned()))?;
        Ok(Self { resource, action })
    }
}

impl Serialize for Permission {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(D::Error::custom)
    }
}

/// An authenticated user as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Whether the email address has been verified.
    #[serde(default)]
    pub email_verified: bool,
    /// The user's single assigned role.
    #[serde(default)]
    pub role: Role,
    /// Extra grants beyond the role defaults. Never revocations.
    #[serde(default)]
    pub permission_overrides: Vec<Permission>,
}

/// Response body for auth-flow endpoints that return a human-readable message
/// (forgot password, reset password, verify email).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// A free-form note.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique note identifier (UUID string).
    pub id: String,
    pub title: String,
    pub content: String,
    /// ISO 8601 creation timestamp, if the server provides one.
    pub created_at: Option<String>,
    /// ISO 8601 last-update timestamp, if the server provides one.
    pub updated_at: Option<String>,
}

/// A todo item with completion state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique todo identifier (UUID string).
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    /// ISO 8601 due date, if set.
    pub due_date: Option<String>,
    /// Free-form priority label (e.g. `"high"`), if set.
    pub priority: Option<String>,
}

/// A dated diary entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiaryEntry {
    /// Unique entry identifier (UUID string).
    pub id: String,
    pub title: String,
    pub content: String,
    /// ISO 8601 date the entry is about, if set.
    pub entry_date: Option<String>,
    /// Free-form mood label, if set.
    pub mood: Option<String>,
}

/// A project grouping related work.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier (UUID string).
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Free-form status label (e.g. `"active"`), if set.
    pub status: Option<String>,
}

/// A saved external resource link.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceLink {
    /// Unique resource identifier (UUID string).
    pub id: String,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
}
