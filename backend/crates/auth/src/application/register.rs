//! Register Use Case
//!
//! Creates a new account and signs it in straight away.

use std::sync::Arc;

use kernel::validation::non_blank;
use platform::password::ClearTextPassword;

use crate::application::token::TokenService;
use crate::domain::entity::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, UserName};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Token plus the account it was issued for (shared by register and login)
pub struct AuthOutput {
    pub token: String,
    pub user: User,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<AuthOutput> {
        let (Some(username), Some(email), Some(password)) = (
            non_blank(input.username),
            non_blank(input.email),
            input.password.filter(|p| !p.is_empty()),
        ) else {
            return Err(AuthError::MissingFields);
        };

        let username = UserName::new(username)?;
        let email = Email::new(email)?;
        let password =
            ClearTextPassword::new(password).map_err(|e| AuthError::Validation(e.to_string()))?;

        if self
            .repo
            .exists_by_username_or_email(&username, &email)
            .await?
        {
            return Err(AuthError::DuplicateUser);
        }

        let password_hash = password
            .hash()
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = self
            .repo
            .create(&NewUser::registration(username, email, password_hash))
            .await?;

        let token = self
            .tokens
            .issue(user.user_id, user.username.as_str(), user.role)?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User registered"
        );

        Ok(AuthOutput { token, user })
    }
}
