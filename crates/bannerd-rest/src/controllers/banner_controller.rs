//! Banner controller: the user resolution endpoint and the admin surface.

use crate::{
    extractors::{ListBannersQuery, UserBannerQuery},
    responses::{created, no_content, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use bannerd_core::BannerId;
use bannerd_service::{BannerResponse, CreateBannerRequest, CreateBannerResponse, UpdateBannerRequest};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

/// Resolve the banner shown to a user for a `(tag, feature)` pair.
///
/// Returns the bare banner content: the resolver's contract exposes content
/// only, never internal metadata.
#[utoipa::path(
    get,
    path = "/user_banner",
    tag = "banners",
    params(UserBannerQuery),
    security(("token" = [])),
    responses(
        (status = 200, description = "Banner content"),
        (status = 400, description = "Missing or invalid tag_id/feature_id"),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Banner is not active"),
        (status = 404, description = "No banner for this tag and feature")
    )
)]
pub async fn get_user_banner(
    State(state): State<AppState>,
    Query(query): Query<UserBannerQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    debug!(
        "User banner request: tag {} feature {} bypass {}",
        query.tag_id(),
        query.feature_id(),
        query.use_last_revision()
    );

    let content = state
        .banner_service
        .resolve_user_banner(query.tag_id(), query.feature_id(), query.use_last_revision())
        .await?;
    Ok(Json(content))
}

/// List banners matching a tag and/or feature filter (admin only).
#[utoipa::path(
    get,
    path = "/banner",
    tag = "banners",
    params(ListBannersQuery),
    security(("token" = [])),
    responses(
        (status = 200, description = "Matching banners", body = Vec<BannerResponse>),
        (status = 400, description = "Neither tag_id nor feature_id given"),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Admin role required"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_banners(
    State(state): State<AppState>,
    Query(query): Query<ListBannersQuery>,
) -> ApiResult<Vec<BannerResponse>> {
    debug!("List banners request: {:?}", query);

    let banners = state.banner_service.list_banners(query.into()).await?;
    ok(banners)
}

/// Create a banner (admin only).
#[utoipa::path(
    post,
    path = "/banner",
    tag = "banners",
    request_body = CreateBannerRequest,
    security(("token" = [])),
    responses(
        (status = 201, description = "Banner created", body = CreateBannerResponse),
        (status = 400, description = "Invalid body"),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Admin role required"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn create_banner(
    State(state): State<AppState>,
    Json(request): Json<CreateBannerRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CreateBannerResponse>>), AppError> {
    debug!("Create banner request for feature {}", request.feature_id);

    let response = state.banner_service.create_banner(request).await?;
    Ok(created(response))
}

/// Replace all fields of a banner (admin only).
#[utoipa::path(
    patch,
    path = "/banner/{id}",
    tag = "banners",
    request_body = UpdateBannerRequest,
    params(("id" = i64, Path, description = "Banner id")),
    security(("token" = [])),
    responses(
        (status = 200, description = "Banner updated", body = BannerResponse),
        (status = 400, description = "Invalid id or body"),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "No such banner"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn update_banner(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateBannerRequest>,
) -> ApiResult<BannerResponse> {
    debug!("Update banner request: {}", id);

    let response = state
        .banner_service
        .update_banner(BannerId::new(id), request)
        .await?;
    ok(response)
}

/// Soft-delete a banner (admin only).
#[utoipa::path(
    delete,
    path = "/banner/{id}",
    tag = "banners",
    params(("id" = i64, Path, description = "Banner id")),
    security(("token" = [])),
    responses(
        (status = 204, description = "Banner deleted"),
        (status = 400, description = "Invalid id"),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "No such banner"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn delete_banner(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!("Delete banner request: {}", id);

    state.banner_service.delete_banner(BannerId::new(id)).await?;
    Ok(no_content())
}
