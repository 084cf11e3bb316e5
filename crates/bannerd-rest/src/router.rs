//! Main application router.

use crate::{
    controllers::{banner_controller, health_controller},
    middleware::{logging_middleware, require_admin, require_user, AuthMiddlewareState},
    openapi::ApiDoc,
    state::AppState,
};
use bannerd_config::ServerConfig;
use axum::{
    middleware,
    routing::{get, patch},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates the main application router.
///
/// The authorization gate is layered in front of every banner route:
/// `require_user` on the resolution endpoint, `require_admin` on the write
/// and listing surface. Health endpoints are unauthenticated.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let auth_state = AuthMiddlewareState::new(state.auth_service.clone());

    let user_routes = Router::new()
        .route("/user_banner", get(banner_controller::get_user_banner))
        .route_layer(middleware::from_fn_with_state(
            auth_state.clone(),
            require_user,
        ))
        .with_state(state.clone());

    let admin_routes = Router::new()
        .route(
            "/banner",
            get(banner_controller::list_banners).post(banner_controller::create_banner),
        )
        .route(
            "/banner/:id",
            patch(banner_controller::update_banner).delete(banner_controller::delete_banner),
        )
        .route_layer(middleware::from_fn_with_state(auth_state, require_admin))
        .with_state(state);

    let router = Router::new()
        .merge(health_controller::router())
        .merge(user_routes)
        .merge(admin_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .layer(create_cors_layer(server_config))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with banner endpoints and Swagger UI at /swagger-ui");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.cors_enabled {
        if server_config.cors_origins.contains(&"*".to_string()) {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    } else {
        CorsLayer::new()
    }
}
