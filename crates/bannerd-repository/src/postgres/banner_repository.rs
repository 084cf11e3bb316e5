//! Postgres banner repository implementation.

use crate::{pool::DatabasePool, traits::BannerRepository};
use bannerd_core::{Banner, BannerFilter, BannerId, BannerdResult, FeatureId, TagId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Postgres, QueryBuilder};
use std::sync::Arc;
use tracing::debug;

/// Postgres banner repository implementation.
#[derive(Clone)]
pub struct PgBannerRepository {
    pool: Arc<DatabasePool>,
}

impl PgBannerRepository {
    /// Creates a new Postgres banner repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a banner.
#[derive(Debug, FromRow)]
struct BannerRow {
    id: i64,
    feature_id: i32,
    tag_ids: Vec<i32>,
    content: serde_json::Value,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<BannerRow> for Banner {
    fn from(row: BannerRow) -> Self {
        Self {
            id: BannerId::new(row.id),
            feature_id: row.feature_id,
            tag_ids: row.tag_ids,
            content: row.content,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        }
    }
}

const BANNER_COLUMNS: &str =
    "id, feature_id, tag_ids, content, is_active, created_at, updated_at, deleted_at";

#[async_trait]
impl BannerRepository for PgBannerRepository {
    async fn find_by_tag_and_feature(
        &self,
        tag_id: TagId,
        feature_id: FeatureId,
    ) -> BannerdResult<Option<Banner>> {
        debug!("Finding banner by tag {} and feature {}", tag_id, feature_id);

        let row = sqlx::query_as::<_, BannerRow>(&format!(
            r#"
            SELECT {BANNER_COLUMNS}
            FROM banners
            WHERE tag_ids @> $1 AND feature_id = $2 AND deleted_at IS NULL
            ORDER BY id
            LIMIT 1
            "#
        ))
        .bind(vec![tag_id])
        .bind(feature_id)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Banner::from))
    }

    async fn find_by_id(&self, id: BannerId) -> BannerdResult<Option<Banner>> {
        debug!("Finding banner by id: {}", id);

        let row = sqlx::query_as::<_, BannerRow>(&format!(
            r#"
            SELECT {BANNER_COLUMNS}
            FROM banners
            WHERE id = $1 AND deleted_at IS NULL
            "#
        ))
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Banner::from))
    }

    async fn list(&self, filter: BannerFilter) -> BannerdResult<Vec<Banner>> {
        debug!("Listing banners with filter: {:?}", filter);

        let mut query = QueryBuilder::<Postgres>::new(format!(
            "SELECT {BANNER_COLUMNS} FROM banners WHERE deleted_at IS NULL"
        ));

        if let Some(feature_id) = filter.feature_id {
            query.push(" AND feature_id = ").push_bind(feature_id);
        }
        if let Some(tag_id) = filter.tag_id {
            query.push(" AND tag_ids @> ").push_bind(vec![tag_id]);
        }

        query.push(" ORDER BY id");

        if let Some(limit) = filter.limit {
            query.push(" LIMIT ").push_bind(limit);
        }
        if let Some(offset) = filter.offset {
            query.push(" OFFSET ").push_bind(offset);
        }

        let rows: Vec<BannerRow> = query
            .build_query_as()
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows.into_iter().map(Banner::from).collect())
    }

    async fn create(&self, banner: &Banner) -> BannerdResult<Banner> {
        debug!("Creating banner for feature {}", banner.feature_id);

        let row = sqlx::query_as::<_, BannerRow>(&format!(
            r#"
            INSERT INTO banners (feature_id, tag_ids, content, is_active)
            VALUES ($1, $2, $3, $4)
            RETURNING {BANNER_COLUMNS}
            "#
        ))
        .bind(banner.feature_id)
        .bind(&banner.tag_ids)
        .bind(&banner.content)
        .bind(banner.is_active)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(Banner::from(row))
    }

    async fn update(&self, banner: &Banner) -> BannerdResult<Banner> {
        debug!("Updating banner: {}", banner.id);

        let row = sqlx::query_as::<_, BannerRow>(&format!(
            r#"
            UPDATE banners
            SET feature_id = $2, tag_ids = $3, content = $4, is_active = $5,
                updated_at = now()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING {BANNER_COLUMNS}
            "#
        ))
        .bind(banner.id.into_inner())
        .bind(banner.feature_id)
        .bind(&banner.tag_ids)
        .bind(&banner.content)
        .bind(banner.is_active)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(Banner::from(row))
    }

    async fn delete(&self, id: BannerId) -> BannerdResult<bool> {
        debug!("Soft-deleting banner: {}", id);

        let result = sqlx::query(
            r#"
            UPDATE banners
            SET deleted_at = now()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.into_inner())
        .execute(self.pool.inner())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
