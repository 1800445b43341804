//! User record as stored in the `users` table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Server-assigned, monotonically increasing identifier
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Fields supplied by the client when creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
