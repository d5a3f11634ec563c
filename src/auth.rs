//! Role gate. Identity is established upstream; requests arrive with the
//! caller's role in the `x-user-role` header.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::error::ApiError;
use crate::models::user_model::Role;

pub const ROLE_HEADER: &str = "x-user-role";

pub fn role_of(parts: &Parts) -> Option<Role> {
    parts
        .headers
        .get(ROLE_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
}

/// Admin check shared by the extractor and the websocket actions.
pub fn require_admin(role: Option<Role>) -> Result<(), ApiError> {
    match role {
        Some(Role::Admin) => Ok(()),
        Some(Role::User) => Err(ApiError::Forbidden),
        None => Err(ApiError::Unauthorized),
    }
}

/// Any signed-in caller.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Role);

/// A caller with the admin role.
#[derive(Debug, Clone, Copy)]
pub struct AdminUser;

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        role_of(parts).map(AuthUser).ok_or(ApiError::Unauthorized)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        require_admin(role_of(parts)).map(|()| AdminUser).map_err(|e| {
            if matches!(e, ApiError::Forbidden) {
                tracing::warn!(path = %parts.uri.path(), "admin route refused for user role");
            }
            e
        })
    }
}
