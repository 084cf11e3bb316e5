//! Banner-related DTOs.

use bannerd_core::{Banner, BannerId, FeatureId, TagId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to create a new banner.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBannerRequest {
    /// Tags the banner applies to; must be non-empty.
    pub tag_ids: Vec<TagId>,

    /// Feature the banner is shown in; must be non-zero.
    pub feature_id: FeatureId,

    /// Opaque content payload.
    #[schema(value_type = Object)]
    pub content: serde_json::Value,

    /// Whether the banner is served to users.
    #[serde(default)]
    pub is_active: bool,
}

/// Request to update a banner: a full replace of all mutable fields.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateBannerRequest {
    pub tag_ids: Vec<TagId>,
    pub feature_id: FeatureId,
    #[schema(value_type = Object)]
    pub content: serde_json::Value,
    #[serde(default)]
    pub is_active: bool,
}

/// Banner as exposed on the admin listing surface.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BannerResponse {
    pub banner_id: BannerId,
    pub tag_ids: Vec<TagId>,
    pub feature_id: FeatureId,
    #[schema(value_type = Object)]
    pub content: serde_json::Value,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Banner> for BannerResponse {
    fn from(banner: Banner) -> Self {
        Self {
            banner_id: banner.id,
            tag_ids: banner.tag_ids,
            feature_id: banner.feature_id,
            content: banner.content,
            is_active: banner.is_active,
            created_at: banner.created_at,
            updated_at: banner.updated_at,
        }
    }
}

/// Response for a successful banner creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBannerResponse {
    /// Store-assigned id of the new banner.
    pub banner_id: BannerId,
}
