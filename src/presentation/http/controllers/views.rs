// src/presentation/http/controllers/views.rs
use crate::application::dto::ViewDto;
use crate::domain::navigation::{Route, RouteParams};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};

#[utoipa::path(
    get,
    path = "/api/v1/view",
    params(
        ("a" = Option<String>, Query, description = "Article identifier"),
        ("p" = Option<String>, Query, description = "Page: about, privacy, affiliation, legal or admin"),
        ("c" = Option<String>, Query, description = "Section: MODE or GEEK"),
        ("s" = Option<String>, Query, description = "Sub-category within the section")
    ),
    responses(
        (status = 200, description = "Everything needed to render the page.", body = ViewDto),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Views"
)]
pub async fn resolve_view(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<RouteParams>,
) -> HttpResult<Json<ViewDto>> {
    let route = Route::from_params(&params);
    state
        .services
        .views
        .resolve(&user, route)
        .await
        .into_http()
        .map(Json)
}
