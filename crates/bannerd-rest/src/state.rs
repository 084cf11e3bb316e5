//! Application state for Axum handlers.

use bannerd_service::{AuthService, BannerService};
use std::sync::Arc;

/// Shared application state.
///
/// The service handles are constructed once at process start and injected
/// here; handlers and middleware only ever see these references.
#[derive(Clone)]
pub struct AppState {
    pub banner_service: Arc<dyn BannerService>,
    pub auth_service: Arc<dyn AuthService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        banner_service: Arc<dyn BannerService>,
        auth_service: Arc<dyn AuthService>,
    ) -> Self {
        Self {
            banner_service,
            auth_service,
        }
    }
}
