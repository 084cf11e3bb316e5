//! OpenAPI documentation configuration.

use bannerd_core::ErrorResponse;
use bannerd_service::{
    BannerResponse, CreateBannerRequest, CreateBannerResponse, UpdateBannerRequest,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// OpenAPI documentation for the bannerd API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "bannerd API",
        version = "1.0.0",
        description = "Per-user banner delivery with cached resolution",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::banner_controller::get_user_banner,
        crate::controllers::banner_controller::list_banners,
        crate::controllers::banner_controller::create_banner,
        crate::controllers::banner_controller::update_banner,
        crate::controllers::banner_controller::delete_banner,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            BannerResponse,
            CreateBannerRequest,
            CreateBannerResponse,
            UpdateBannerRequest,
            ErrorResponse,
            crate::controllers::health_controller::HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "banners", description = "Banner resolution and administration"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Registers the `token` header as the API security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("token"))),
            );
        }
    }
}
