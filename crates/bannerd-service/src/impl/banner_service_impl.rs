//! Banner service implementation.

use crate::banner_service::BannerService;
use crate::cache::{BannerCache, BannerKey, BannerSnapshot};
use crate::dto::{BannerResponse, CreateBannerRequest, CreateBannerResponse, UpdateBannerRequest};
use bannerd_core::{
    Banner, BannerFilter, BannerId, BannerdError, BannerdResult, FeatureId, TagId,
};
use bannerd_repository::BannerRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Banner service backed by a repository and the banner lookup cache.
///
/// The cache handle is constructed once at process start and shared by
/// every request worker.
pub struct BannerServiceImpl<R: BannerRepository> {
    repository: Arc<R>,
    cache: Arc<BannerCache>,
}

impl<R: BannerRepository> BannerServiceImpl<R> {
    /// Creates a new banner service.
    pub fn new(repository: Arc<R>, cache: Arc<BannerCache>) -> Self {
        Self { repository, cache }
    }

    /// Reads the snapshot for `key` from the store and caches it with a
    /// fresh TTL, store misses included.
    async fn refresh_snapshot(&self, key: BannerKey) -> BannerdResult<BannerSnapshot> {
        let snapshot = self
            .repository
            .find_by_tag_and_feature(key.tag_id, key.feature_id)
            .await?;
        self.cache.put(key, snapshot.clone());
        Ok(snapshot)
    }
}

#[async_trait]
impl<R: BannerRepository + 'static> BannerService for BannerServiceImpl<R> {
    async fn resolve_user_banner(
        &self,
        tag_id: TagId,
        feature_id: FeatureId,
        use_last_revision: bool,
    ) -> BannerdResult<serde_json::Value> {
        if tag_id == 0 || feature_id == 0 {
            return Err(BannerdError::validation(
                "tag_id and feature_id are required",
            ));
        }

        let key = BannerKey::new(tag_id, feature_id);

        let cached = if use_last_revision {
            None
        } else {
            self.cache.get(&key)
        };

        let snapshot = match cached {
            Some(snapshot) => {
                debug!("Banner cache hit for ({}, {})", tag_id, feature_id);
                snapshot
            }
            None => self.refresh_snapshot(key).await?,
        };

        match snapshot {
            None => Err(BannerdError::not_found(
                "Banner",
                format!("tag {} feature {}", tag_id, feature_id),
            )),
            Some(banner) if !banner.is_active => {
                Err(BannerdError::forbidden("banner is not active"))
            }
            Some(banner) => Ok(banner.content),
        }
    }

    async fn list_banners(&self, filter: BannerFilter) -> BannerdResult<Vec<BannerResponse>> {
        if !filter.has_scope() {
            return Err(BannerdError::validation("tag_id or feature_id is required"));
        }

        let banners = self.repository.list(filter).await?;
        Ok(banners.into_iter().map(BannerResponse::from).collect())
    }

    async fn create_banner(
        &self,
        request: CreateBannerRequest,
    ) -> BannerdResult<CreateBannerResponse> {
        if request.feature_id == 0 || request.tag_ids.is_empty() {
            return Err(BannerdError::validation(
                "feature_id and tag_ids should be non-empty",
            ));
        }

        let banner = Banner::new(
            request.feature_id,
            request.tag_ids,
            request.content,
            request.is_active,
        );
        let created = self.repository.create(&banner).await?;

        info!("Banner created: {}", created.id);
        Ok(CreateBannerResponse {
            banner_id: created.id,
        })
    }

    async fn update_banner(
        &self,
        id: BannerId,
        request: UpdateBannerRequest,
    ) -> BannerdResult<BannerResponse> {
        if !id.is_valid() {
            return Err(BannerdError::validation("invalid banner id"));
        }
        if request.feature_id == 0 || request.tag_ids.is_empty() {
            return Err(BannerdError::validation(
                "feature_id and tag_ids should be non-empty",
            ));
        }

        let mut banner = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| BannerdError::not_found("Banner", id))?;

        banner.replace_fields(
            request.feature_id,
            request.tag_ids,
            request.content,
            request.is_active,
        );

        let updated = self.repository.update(&banner).await?;

        info!("Banner updated: {}", id);
        Ok(BannerResponse::from(updated))
    }

    async fn delete_banner(&self, id: BannerId) -> BannerdResult<()> {
        if !id.is_valid() {
            return Err(BannerdError::validation("invalid banner id"));
        }

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(BannerdError::not_found("Banner", id));
        }

        info!("Banner deleted: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::DEFAULT_BANNER_TTL;
    use mockall::mock;
    use mockall::predicate::eq;
    use serde_json::json;

    mock! {
        BannerRepo {}

        #[async_trait]
        impl BannerRepository for BannerRepo {
            async fn find_by_tag_and_feature(
                &self,
                tag_id: TagId,
                feature_id: FeatureId,
            ) -> BannerdResult<Option<Banner>>;
            async fn find_by_id(&self, id: BannerId) -> BannerdResult<Option<Banner>>;
            async fn list(&self, filter: BannerFilter) -> BannerdResult<Vec<Banner>>;
            async fn create(&self, banner: &Banner) -> BannerdResult<Banner>;
            async fn update(&self, banner: &Banner) -> BannerdResult<Banner>;
            async fn delete(&self, id: BannerId) -> BannerdResult<bool>;
        }
    }

    fn banner_with(id: i64, content: serde_json::Value, is_active: bool) -> Banner {
        let mut banner = Banner::new(5, vec![1, 2], content, is_active);
        banner.id = BannerId::new(id);
        banner
    }

    fn service(
        repo: MockBannerRepo,
    ) -> (BannerServiceImpl<MockBannerRepo>, Arc<BannerCache>) {
        let cache = Arc::new(BannerCache::new(DEFAULT_BANNER_TTL));
        let service = BannerServiceImpl::new(Arc::new(repo), cache.clone());
        (service, cache)
    }

    #[tokio::test]
    async fn test_zero_ids_rejected_without_store_call() {
        let repo = MockBannerRepo::new();
        let (service, _) = service(repo);

        for (tag, feature) in [(0, 5), (1, 0), (0, 0)] {
            let err = service
                .resolve_user_banner(tag, feature, false)
                .await
                .unwrap_err();
            assert!(matches!(err, BannerdError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn test_cached_snapshot_served_without_store_call() {
        // No expectation on the mock: any store call would panic.
        let repo = MockBannerRepo::new();
        let (service, cache) = service(repo);

        cache.put(
            BannerKey::new(1, 5),
            Some(banner_with(10, json!({"text": "cached"}), true)),
        );

        let content = service.resolve_user_banner(1, 5, false).await.unwrap();
        assert_eq!(content, json!({"text": "cached"}));
    }

    #[tokio::test]
    async fn test_negative_result_cached_once() {
        let mut repo = MockBannerRepo::new();
        repo.expect_find_by_tag_and_feature()
            .with(eq(1), eq(5))
            .times(1)
            .returning(|_, _| Ok(None));
        let (service, cache) = service(repo);

        for _ in 0..2 {
            let err = service.resolve_user_banner(1, 5, false).await.unwrap_err();
            assert!(matches!(err, BannerdError::NotFound { .. }));
        }
        // The miss is recorded as a snapshot.
        assert_eq!(cache.get(&BannerKey::new(1, 5)), Some(None));
    }

    #[tokio::test]
    async fn test_bypass_overwrites_cache_with_latest() {
        let mut repo = MockBannerRepo::new();
        repo.expect_find_by_tag_and_feature()
            .times(1)
            .returning(|_, _| Ok(Some(banner_with(10, json!({"text": "new"}), true))));
        let (service, cache) = service(repo);

        // A stale snapshot is already cached and unexpired.
        cache.put(
            BannerKey::new(1, 5),
            Some(banner_with(10, json!({"text": "old"}), true)),
        );

        let content = service.resolve_user_banner(1, 5, true).await.unwrap();
        assert_eq!(content, json!({"text": "new"}));

        // Subsequent non-bypass reads observe the refreshed snapshot.
        let content = service.resolve_user_banner(1, 5, false).await.unwrap();
        assert_eq!(content, json!({"text": "new"}));
    }

    #[tokio::test]
    async fn test_inactive_banner_is_forbidden() {
        let mut repo = MockBannerRepo::new();
        repo.expect_find_by_tag_and_feature()
            .times(1)
            .returning(|_, _| Ok(Some(banner_with(10, json!({}), false))));
        let (service, _) = service(repo);

        let err = service.resolve_user_banner(1, 5, false).await.unwrap_err();
        assert!(matches!(err, BannerdError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_store_error_propagates() {
        let mut repo = MockBannerRepo::new();
        repo.expect_find_by_tag_and_feature()
            .returning(|_, _| Err(BannerdError::Database("connection refused".to_string())));
        let (service, cache) = service(repo);

        let err = service.resolve_user_banner(1, 5, false).await.unwrap_err();
        assert!(matches!(err, BannerdError::Database(_)));
        // Failures never enter the cache.
        assert_eq!(cache.get(&BannerKey::new(1, 5)), None);
    }

    #[tokio::test]
    async fn test_list_requires_scope() {
        let repo = MockBannerRepo::new();
        let (service, _) = service(repo);

        let err = service
            .list_banners(BannerFilter::default())
            .await
            .unwrap_err();
        assert!(matches!(err, BannerdError::Validation(_)));
    }

    #[tokio::test]
    async fn test_list_passes_filter_through() {
        let filter = BannerFilter::new(Some(2), Some(5), Some(10), None);
        let mut repo = MockBannerRepo::new();
        repo.expect_list()
            .with(eq(filter))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    banner_with(1, json!({"n": 1}), true),
                    banner_with(2, json!({"n": 2}), false),
                ])
            });
        let (service, _) = service(repo);

        let banners = service.list_banners(filter).await.unwrap();
        assert_eq!(banners.len(), 2);
        assert_eq!(banners[0].banner_id, BannerId::new(1));
        // The listing surface exposes inactive banners too.
        assert!(!banners[1].is_active);
    }

    #[tokio::test]
    async fn test_create_validates_body() {
        let repo = MockBannerRepo::new();
        let (service, _) = service(repo);

        let missing_feature = CreateBannerRequest {
            tag_ids: vec![1],
            feature_id: 0,
            content: json!({}),
            is_active: true,
        };
        let missing_tags = CreateBannerRequest {
            tag_ids: vec![],
            feature_id: 5,
            content: json!({}),
            is_active: true,
        };

        for request in [missing_feature, missing_tags] {
            let err = service.create_banner(request).await.unwrap_err();
            assert!(matches!(err, BannerdError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn test_create_returns_new_id() {
        let mut repo = MockBannerRepo::new();
        repo.expect_create()
            .times(1)
            .returning(|banner| {
                let mut created = banner.clone();
                created.id = BannerId::new(77);
                Ok(created)
            });
        let (service, _) = service(repo);

        let response = service
            .create_banner(CreateBannerRequest {
                tag_ids: vec![1, 2, 3],
                feature_id: 5,
                content: json!({"text": "hi"}),
                is_active: true,
            })
            .await
            .unwrap();
        assert_eq!(response.banner_id, BannerId::new(77));
    }

    #[tokio::test]
    async fn test_update_missing_banner_is_not_found() {
        let mut repo = MockBannerRepo::new();
        repo.expect_find_by_id()
            .with(eq(BannerId::new(9)))
            .times(1)
            .returning(|_| Ok(None));
        let (service, _) = service(repo);

        let err = service
            .update_banner(
                BannerId::new(9),
                UpdateBannerRequest {
                    tag_ids: vec![1],
                    feature_id: 5,
                    content: json!({}),
                    is_active: true,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, BannerdError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let mut repo = MockBannerRepo::new();
        repo.expect_find_by_id()
            .returning(|id| {
                let mut banner = banner_with(0, json!({"text": "old"}), true);
                banner.id = id;
                Ok(Some(banner))
            });
        repo.expect_update()
            .withf(|banner| {
                banner.feature_id == 7
                    && banner.tag_ids == vec![4]
                    && banner.content == json!({"text": "new"})
                    && !banner.is_active
            })
            .times(1)
            .returning(|banner| Ok(banner.clone()));
        let (service, _) = service(repo);

        let response = service
            .update_banner(
                BannerId::new(3),
                UpdateBannerRequest {
                    tag_ids: vec![4],
                    feature_id: 7,
                    content: json!({"text": "new"}),
                    is_active: false,
                },
            )
            .await
            .unwrap();
        assert_eq!(response.feature_id, 7);
    }

    #[tokio::test]
    async fn test_writes_do_not_touch_cache() {
        let mut repo = MockBannerRepo::new();
        repo.expect_create()
            .returning(|banner| {
                let mut created = banner.clone();
                created.id = BannerId::new(1);
                Ok(created)
            });
        let (service, cache) = service(repo);

        // An unexpired stale snapshot survives an admin write untouched.
        cache.put(
            BannerKey::new(1, 5),
            Some(banner_with(1, json!({"text": "stale"}), true)),
        );
        service
            .create_banner(CreateBannerRequest {
                tag_ids: vec![1],
                feature_id: 5,
                content: json!({"text": "fresh"}),
                is_active: true,
            })
            .await
            .unwrap();

        let content = service.resolve_user_banner(1, 5, false).await.unwrap();
        assert_eq!(content, json!({"text": "stale"}));
    }

    #[tokio::test]
    async fn test_delete_invalid_and_missing_ids() {
        let mut repo = MockBannerRepo::new();
        repo.expect_delete()
            .with(eq(BannerId::new(8)))
            .times(1)
            .returning(|_| Ok(false));
        let (service, _) = service(repo);

        let err = service.delete_banner(BannerId::new(0)).await.unwrap_err();
        assert!(matches!(err, BannerdError::Validation(_)));

        let err = service.delete_banner(BannerId::new(8)).await.unwrap_err();
        assert!(matches!(err, BannerdError::NotFound { .. }));
    }
}
