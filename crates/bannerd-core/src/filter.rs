//! Filter types for multi-banner listing.

use crate::{FeatureId, TagId};
use serde::{Deserialize, Serialize};

/// Filter for the admin banner listing.
///
/// Zero-valued inputs mean "absent": a zero tag or feature does not filter,
/// a zero limit is unbounded, a zero offset starts at the beginning. The
/// constructor normalizes zeros away so downstream code only sees `Some`
/// for effective constraints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerFilter {
    /// Restrict to banners whose tag set contains this tag.
    pub tag_id: Option<TagId>,
    /// Restrict to banners for this feature.
    pub feature_id: Option<FeatureId>,
    /// Maximum number of rows to return.
    pub limit: Option<i64>,
    /// Number of rows to skip.
    pub offset: Option<i64>,
}

impl BannerFilter {
    /// Creates a filter, treating zero values as absent.
    #[must_use]
    pub fn new(
        tag_id: Option<TagId>,
        feature_id: Option<FeatureId>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Self {
        Self {
            tag_id: tag_id.filter(|t| *t != 0),
            feature_id: feature_id.filter(|f| *f != 0),
            limit: limit.filter(|l| *l != 0),
            offset: offset.filter(|o| *o != 0),
        }
    }

    /// Creates a filter constrained by tag only.
    #[must_use]
    pub fn by_tag(tag_id: TagId) -> Self {
        Self::new(Some(tag_id), None, None, None)
    }

    /// Creates a filter constrained by feature only.
    #[must_use]
    pub fn by_feature(feature_id: FeatureId) -> Self {
        Self::new(None, Some(feature_id), None, None)
    }

    /// Returns true if at least one of tag or feature constrains the query.
    ///
    /// An unscoped listing is rejected at the service boundary.
    #[must_use]
    pub const fn has_scope(&self) -> bool {
        self.tag_id.is_some() || self.feature_id.is_some()
    }
}
