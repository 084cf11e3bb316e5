//! Typed ID wrappers for domain entities.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Tag identifier grouping target users/segments.
pub type TagId = i32;

/// Feature identifier for the product surface a banner is shown in.
pub type FeatureId = i32;

/// A strongly-typed wrapper for banner IDs.
///
/// Valid banner IDs are positive; the store assigns them on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BannerId(pub i64);

impl BannerId {
    /// Creates a banner ID from a raw integer.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner integer.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Returns true for store-assigned (positive) identifiers.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl Display for BannerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for BannerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<BannerId> for i64 {
    fn from(id: BannerId) -> Self {
        id.0
    }
}

/// A strongly-typed wrapper for user IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserId(pub i64);

impl UserId {
    /// Creates a user ID from a raw integer.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner integer.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_id_roundtrip() {
        let id = BannerId::new(42);
        assert_eq!(id.into_inner(), 42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(BannerId::from(42), id);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_banner_id_validity() {
        assert!(BannerId::new(1).is_valid());
        assert!(!BannerId::new(0).is_valid());
        assert!(!BannerId::new(-5).is_valid());
    }

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId::new(7).to_string(), "7");
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = BannerId::new(99);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "99");
        let back: BannerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
