//! Access Guard
//!
//! Bearer-token extractor for protected routes. The verified identity is
//! handed to the handler as an argument; role checks happen in the use case
//! via [`Identity::require_role`]. [`AdminUser`] runs the admin check while
//! extracting, ahead of any body extractor.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, request::Parts};

use crate::application::token::{Identity, TokenService};
use crate::domain::value_object::UserRole;
use crate::error::AuthError;

/// 認証済みの呼び出し元
///
/// ```rust,ignore
/// async fn create_job(AuthUser(identity): AuthUser, ...) -> JobResult<...> {
///     // identity.user_id is the poster
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl<S> FromRequestParts<S> for AuthUser
where
    Arc<TokenService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(AuthError::MissingToken)?;

        let tokens = Arc::<TokenService>::from_ref(state);
        let identity = tokens.verify(token)?;

        Ok(AuthUser(identity))
    }
}

/// 管理者として認証済みの呼び出し元
///
/// Rejects with [`AuthError::Forbidden`] before the request body is read.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Identity);

impl<S> FromRequestParts<S> for AdminUser
where
    Arc<TokenService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser(identity) = AuthUser::from_request_parts(parts, state).await?;
        identity.require_role(UserRole::Admin)?;

        Ok(AdminUser(identity))
    }
}

/// `Authorization: Bearer <token>` の token 部分
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
