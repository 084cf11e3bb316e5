//! Banner service trait definition.

use crate::dto::{BannerResponse, CreateBannerRequest, CreateBannerResponse, UpdateBannerRequest};
use bannerd_core::{BannerFilter, BannerId, BannerdResult, FeatureId, TagId};
use async_trait::async_trait;

/// Banner service: the cache-or-store read paths plus the admin write path.
#[async_trait]
pub trait BannerService: Send + Sync {
    /// Resolves the banner content served to a user for `(tag, feature)`.
    ///
    /// Reads through the banner cache unless `use_last_revision` forces a
    /// fresh store read; either store read overwrites the cached snapshot.
    async fn resolve_user_banner(
        &self,
        tag_id: TagId,
        feature_id: FeatureId,
        use_last_revision: bool,
    ) -> BannerdResult<serde_json::Value>;

    /// Lists banners matching the filter. Always reads the store directly.
    async fn list_banners(&self, filter: BannerFilter) -> BannerdResult<Vec<BannerResponse>>;

    /// Creates a banner and returns its new id.
    async fn create_banner(
        &self,
        request: CreateBannerRequest,
    ) -> BannerdResult<CreateBannerResponse>;

    /// Replaces all fields of an existing banner.
    async fn update_banner(
        &self,
        id: BannerId,
        request: UpdateBannerRequest,
    ) -> BannerdResult<BannerResponse>;

    /// Soft-deletes a banner.
    async fn delete_banner(&self, id: BannerId) -> BannerdResult<()>;
}
