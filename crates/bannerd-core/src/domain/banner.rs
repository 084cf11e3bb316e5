//! Banner entity.

use crate::{BannerId, FeatureId, TagId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Banner entity: a content payload shown for a feature/tag combination.
///
/// A banner is visible to a request iff its `tag_ids` contains the request's
/// tag, its `feature_id` matches, it is active, and it is not soft-deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    /// Unique identifier, assigned by the store.
    pub id: BannerId,

    /// The product surface this banner is shown in.
    pub feature_id: FeatureId,

    /// Tags this banner applies to.
    pub tag_ids: Vec<TagId>,

    /// Opaque content payload; never interpreted by the core.
    pub content: serde_json::Value,

    /// Visibility gate: inactive banners resolve but are not served.
    pub is_active: bool,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,

    /// Soft-delete marker; deleted banners are invisible to all reads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Banner {
    /// Creates a new banner ahead of its first store insert.
    ///
    /// The id is a placeholder until the store assigns one.
    #[must_use]
    pub fn new(
        feature_id: FeatureId,
        tag_ids: Vec<TagId>,
        content: serde_json::Value,
        is_active: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: BannerId::new(0),
            feature_id,
            tag_ids,
            content,
            is_active,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Returns true if this banner applies to the given tag.
    #[must_use]
    pub fn matches_tag(&self, tag_id: TagId) -> bool {
        self.tag_ids.contains(&tag_id)
    }

    /// Returns true if this banner has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Replaces all mutable fields from an inbound payload and bumps
    /// `updated_at`. Identity and lifecycle timestamps are preserved.
    pub fn replace_fields(
        &mut self,
        feature_id: FeatureId,
        tag_ids: Vec<TagId>,
        content: serde_json::Value,
        is_active: bool,
    ) {
        self.feature_id = feature_id;
        self.tag_ids = tag_ids;
        self.content = content;
        self.is_active = is_active;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_banner() -> Banner {
        Banner::new(5, vec![1, 2, 3], json!({"title": "hello"}), true)
    }

    #[test]
    fn test_matches_tag() {
        let banner = sample_banner();
        assert!(banner.matches_tag(1));
        assert!(banner.matches_tag(3));
        assert!(!banner.matches_tag(4));
    }

    #[test]
    fn test_new_banner_is_live() {
        let banner = sample_banner();
        assert!(!banner.is_deleted());
        assert!(banner.is_active);
        assert_eq!(banner.id, BannerId::new(0));
    }

    #[test]
    fn test_replace_fields() {
        let mut banner = sample_banner();
        let created = banner.created_at;
        banner.replace_fields(9, vec![7], json!({"title": "bye"}), false);

        assert_eq!(banner.feature_id, 9);
        assert_eq!(banner.tag_ids, vec![7]);
        assert_eq!(banner.content, json!({"title": "bye"}));
        assert!(!banner.is_active);
        assert_eq!(banner.created_at, created);
        assert!(banner.updated_at >= created);
    }
}
