// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Any caller holding a valid token (visitor or administrator).
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

/// A caller whose token carries the administrator role.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthenticatedUser);

async fn authenticate(parts: &Parts) -> Result<AuthenticatedUser, HttpError> {
    let app_state = parts.extensions.get::<HttpState>().cloned().ok_or_else(|| {
        HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
    })?;

    let header = parts
        .headers
        .typed_get::<Authorization<Bearer>>()
        .ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized(
                "missing Authorization header",
            ))
        })?;

    app_state
        .services
        .token_manager()
        .authenticate(header.token())
        .await
        .map_err(HttpError::from_error)
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        authenticate(parts).await.map(Self)
    }
}

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = authenticate(parts).await?;
        if !user.is_admin() {
            tracing::warn!(uid = %user.id, "administrator endpoint refused");
            return Err(HttpError::from_error(ApplicationError::forbidden(
                "administrator role required",
            )));
        }
        Ok(Self(user))
    }
}
