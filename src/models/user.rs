//! The user record exchanged with the external API.

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a user record.
pub type UserId = i64;

/// Id sent for records that have not been saved yet.
pub const UNSAVED_ID: UserId = 0;

/// A single user record.
///
/// Identity is `id`. Uniqueness is owned by the external API, not checked
/// locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl User {
    /// Build a record the server has not assigned an id to yet.
    pub fn unsaved(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: UNSAVED_ID,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
