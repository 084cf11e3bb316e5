//! Query parameter types for the banner endpoints.

use bannerd_core::{BannerFilter, FeatureId, TagId};
use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for the user banner resolution endpoint.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct UserBannerQuery {
    /// Requesting user's tag.
    pub tag_id: Option<TagId>,
    /// Feature the banner is requested for.
    pub feature_id: Option<FeatureId>,
    /// Forces a fresh store read, bypassing the cache.
    pub use_last_revision: Option<bool>,
}

impl UserBannerQuery {
    /// Missing ids surface as zero so the resolver rejects them itself.
    #[must_use]
    pub fn tag_id(&self) -> TagId {
        self.tag_id.unwrap_or(0)
    }

    /// Missing ids surface as zero so the resolver rejects them itself.
    #[must_use]
    pub fn feature_id(&self) -> FeatureId {
        self.feature_id.unwrap_or(0)
    }

    /// Bypass defaults to off.
    #[must_use]
    pub fn use_last_revision(&self) -> bool {
        self.use_last_revision.unwrap_or(false)
    }
}

/// Query parameters for the admin banner listing endpoint.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListBannersQuery {
    /// Restrict to banners whose tag set contains this tag.
    pub tag_id: Option<TagId>,
    /// Restrict to banners for this feature.
    pub feature_id: Option<FeatureId>,
    /// Maximum number of rows (zero means unbounded).
    pub limit: Option<i64>,
    /// Rows to skip (zero means none).
    pub offset: Option<i64>,
}

impl From<ListBannersQuery> for BannerFilter {
    fn from(query: ListBannersQuery) -> Self {
        Self::new(query.tag_id, query.feature_id, query.limit, query.offset)
    }
}
