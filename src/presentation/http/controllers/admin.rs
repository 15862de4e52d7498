// src/presentation/http/controllers/admin.rs
use super::articles::ArticleRequest;
use crate::application::dto::ViewDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminUser;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    /// Shared dashboard URL in its embeddable form.
    pub embed_url: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/preview",
    request_body = ArticleRequest,
    responses(
        (status = 200, description = "Draft rendered as an article page.", body = ViewDto),
        (status = 400, description = "Invalid article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Administrator role required.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn preview_article(
    Extension(state): Extension<HttpState>,
    AdminUser(user): AdminUser,
    Json(payload): Json<ArticleRequest>,
) -> HttpResult<Json<ViewDto>> {
    state
        .services
        .views
        .preview(&user, payload.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/analytics",
    responses(
        (status = 200, description = "Analytics dashboard location.", body = AnalyticsResponse),
        (status = 403, description = "Administrator role required.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn analytics(
    Extension(state): Extension<HttpState>,
    AdminUser(user): AdminUser,
) -> HttpResult<Json<AnalyticsResponse>> {
    user.ensure_capability("analytics", "view").into_http()?;

    Ok(Json(AnalyticsResponse {
        embed_url: state.services.site().analytics_embed_url(),
    }))
}
