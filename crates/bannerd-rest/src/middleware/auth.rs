//! Authorization middleware.
//!
//! The gate runs before every guarded handler: it resolves the `token`
//! header through the auth service (auth cache, then store) and enforces
//! the role the route requires.

use crate::responses::AppError;
use bannerd_service::AuthService;
use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::debug;

/// Name of the request header carrying the credential token.
pub const TOKEN_HEADER: &str = "token";

/// Authorization middleware state.
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub auth_service: Arc<dyn AuthService>,
}

impl AuthMiddlewareState {
    /// Creates new middleware state around an auth service handle.
    pub fn new(auth_service: Arc<dyn AuthService>) -> Self {
        Self { auth_service }
    }
}

/// Requires any authenticated user.
pub async fn require_user(
    State(state): State<AuthMiddlewareState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    authorize(state, request, next, false).await
}

/// Requires an authenticated admin.
pub async fn require_admin(
    State(state): State<AuthMiddlewareState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    authorize(state, request, next, true).await
}

async fn authorize(
    state: AuthMiddlewareState,
    request: Request<Body>,
    next: Next,
    requires_admin: bool,
) -> Response {
    let token = request
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default();

    match state.auth_service.authorize(token, requires_admin).await {
        Ok(user) => {
            debug!("Authorized user {} (admin: {})", user.id, user.is_admin);
            next.run(request).await
        }
        Err(err) => AppError(err).into_response(),
    }
}
