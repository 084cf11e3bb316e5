//! HTTP middleware.

mod auth;
mod logging;

pub use auth::{require_admin, require_user, AuthMiddlewareState, TOKEN_HEADER};
pub use logging::logging_middleware;
