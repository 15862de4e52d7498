// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::auth::{LoginCommand, LoginResult},
    dto::{AuthTokenDto, ProfileDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: AuthTokenDto,
    pub user: ProfileDto,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            token: result.token,
            user: result.profile,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/anonymous",
    responses(
        (status = 200, description = "Read-only visitor session.", body = LoginResponse)
    ),
    security([]),
    tag = "Auth"
)]
pub async fn sign_in_anonymously(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<LoginResponse>> {
    state
        .services
        .auth_commands
        .sign_in_anonymously()
        .await
        .into_http()
        .map(|result| Json(result.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Administrator session.", body = LoginResponse),
        (status = 401, description = "Access denied.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many attempts.")
    ),
    security([]),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<LoginResponse>> {
    let command = LoginCommand {
        email: payload.email,
        password: payload.password,
    };

    state
        .services
        .auth_commands
        .login(command)
        .await
        .into_http()
        .map(|result| Json(result.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, description = "Identity behind the bearer token.", body = ProfileDto),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn profile(Authenticated(user): Authenticated) -> Json<ProfileDto> {
    Json(ProfileDto::from(&user))
}
