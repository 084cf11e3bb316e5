//! User entity.

use crate::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity: an identity resolved from a request token.
///
/// Users are provisioned out of band (seed data); the resolution core only
/// ever reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by the store.
    pub id: UserId,

    /// Unique credential string carried in the request token header.
    /// Never exposed via API responses.
    #[serde(skip_serializing)]
    pub token: String,

    /// Role flag: admins may use the write surface.
    pub is_admin: bool,

    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a user with the given credential and role.
    #[must_use]
    pub fn new(id: UserId, token: impl Into<String>, is_admin: bool) -> Self {
        let now = Utc::now();
        Self {
            id,
            token: token.into(),
            is_admin,
            created_at: now,
            updated_at: now,
        }
    }
}
