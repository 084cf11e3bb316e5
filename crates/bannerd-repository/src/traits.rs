//! Repository trait definitions.

use bannerd_core::{Banner, BannerFilter, BannerId, BannerdResult, FeatureId, TagId, User};
use async_trait::async_trait;

/// Banner repository trait: the relational Store the resolution core
/// issues its queries to.
#[async_trait]
pub trait BannerRepository: Send + Sync {
    /// Finds the first live banner whose tag set contains `tag_id` and whose
    /// feature equals `feature_id` (lowest id wins when several match).
    async fn find_by_tag_and_feature(
        &self,
        tag_id: TagId,
        feature_id: FeatureId,
    ) -> BannerdResult<Option<Banner>>;

    /// Finds a live banner by ID.
    async fn find_by_id(&self, id: BannerId) -> BannerdResult<Option<Banner>>;

    /// Lists live banners matching the filter, ordered by id.
    async fn list(&self, filter: BannerFilter) -> BannerdResult<Vec<Banner>>;

    /// Inserts a new banner and returns it with its store-assigned id.
    async fn create(&self, banner: &Banner) -> BannerdResult<Banner>;

    /// Updates an existing banner in place.
    async fn update(&self, banner: &Banner) -> BannerdResult<Banner>;

    /// Soft-deletes a banner by ID. Returns false if it did not exist.
    async fn delete(&self, id: BannerId) -> BannerdResult<bool>;
}

/// User repository trait: read-side identity resolution plus idempotent
/// seed provisioning.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by credential token.
    async fn find_by_token(&self, token: &str) -> BannerdResult<Option<User>>;

    /// Inserts a seed user if the token is not present yet.
    /// Returns the stored user either way.
    async fn upsert_seed_user(&self, token: &str, is_admin: bool) -> BannerdResult<User>;
}
