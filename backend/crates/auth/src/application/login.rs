//! Login Use Case
//!
//! Exchanges a user name and password for a bearer token. Every failure
//! after the required-field check is reported as
//! [`AuthError::InvalidCredentials`].

use std::sync::Arc;

use kernel::validation::non_blank;
use platform::password::ClearTextPassword;

use crate::application::register::AuthOutput;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::UserName;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<AuthOutput> {
        let (Some(username), Some(password)) = (
            non_blank(input.username),
            input.password.filter(|p| !p.is_empty()),
        ) else {
            return Err(AuthError::MissingFields);
        };

        let username = UserName::new(username).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password = ClearTextPassword::for_verification(password);
        if !user.password_hash.verify(&password) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(user.user_id, user.username.as_str(), user.role)?;

        tracing::info!(
            user_id = %user.user_id,
            role = %user.role,
            "User logged in"
        );

        Ok(AuthOutput { token, user })
    }
}
