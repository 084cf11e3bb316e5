//! Authorization service trait definition.

use bannerd_core::{BannerdResult, User};
use async_trait::async_trait;

/// Authorization gate: resolves a request token to an identity and enforces
/// role requirements, reading through the auth cache.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolves `token` to a user and checks the admin requirement.
    ///
    /// Fails with `Unauthorized` when the token resolves to nobody and
    /// `Forbidden` when the resolved identity lacks the admin role.
    async fn authorize(&self, token: &str, requires_admin: bool) -> BannerdResult<User>;
}
