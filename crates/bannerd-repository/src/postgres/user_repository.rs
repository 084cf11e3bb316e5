//! Postgres user repository implementation.

use crate::{pool::DatabasePool, traits::UserRepository};
use bannerd_core::{BannerdResult, User, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::{debug, info};

/// Postgres user repository implementation.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: Arc<DatabasePool>,
}

impl PgUserRepository {
    /// Creates a new Postgres user repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    token: String,
    is_admin: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            token: row.token,
            is_admin: row.is_admin,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_token(&self, token: &str) -> BannerdResult<Option<User>> {
        debug!("Finding user by token");

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, token, is_admin, created_at, updated_at
            FROM users
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn upsert_seed_user(&self, token: &str, is_admin: bool) -> BannerdResult<User> {
        info!("Ensuring seed user exists (admin: {})", is_admin);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (token, is_admin)
            VALUES ($1, $2)
            ON CONFLICT (token) DO UPDATE SET is_admin = EXCLUDED.is_admin
            RETURNING id, token, is_admin, created_at, updated_at
            "#,
        )
        .bind(token)
        .bind(is_admin)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(User::from(row))
    }
}
