//! Authorization service implementation.

use crate::auth_service::AuthService;
use crate::cache::AuthCache;
use bannerd_core::{BannerdError, BannerdResult, User};
use bannerd_repository::UserRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Authorization gate backed by a repository and the auth cache.
///
/// Only successful resolutions are cached: an unknown token is never written
/// into the cache, so the next attempt with the same token re-checks the
/// store instead of being masked by a poisoned entry.
pub struct AuthServiceImpl<R: UserRepository> {
    repository: Arc<R>,
    cache: Arc<AuthCache>,
}

impl<R: UserRepository> AuthServiceImpl<R> {
    /// Creates a new authorization gate.
    pub fn new(repository: Arc<R>, cache: Arc<AuthCache>) -> Self {
        Self { repository, cache }
    }
}

#[async_trait]
impl<R: UserRepository + 'static> AuthService for AuthServiceImpl<R> {
    async fn authorize(&self, token: &str, requires_admin: bool) -> BannerdResult<User> {
        if token.is_empty() {
            return Err(BannerdError::unauthorized("missing token"));
        }

        let user = match self.cache.get(&token.to_string()) {
            Some(user) => {
                debug!("Auth cache hit for user {}", user.id);
                user
            }
            None => {
                let user = self
                    .repository
                    .find_by_token(token)
                    .await?
                    .ok_or_else(|| BannerdError::unauthorized("unknown token"))?;
                debug!("Resolved token to user {}", user.id);
                user
            }
        };

        // Every successful resolution re-inserts the entry, sliding its TTL.
        self.cache.put(token.to_string(), user.clone());

        if requires_admin && !user.is_admin {
            return Err(BannerdError::forbidden("admin role required"));
        }

        Ok(user)
    }
}
