//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{NewUser, User};
use crate::domain::value_object::{Email, UserName};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user and return the stored row.
    ///
    /// A unique-constraint race with a concurrent sign-up must surface as
    /// [`AuthError::DuplicateUser`](crate::error::AuthError::DuplicateUser).
    async fn create(&self, user: &NewUser) -> AuthResult<User>;

    /// Case-insensitive lookup by user name
    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>>;

    /// Whether the user name or the email is already taken
    async fn exists_by_username_or_email(
        &self,
        username: &UserName,
        email: &Email,
    ) -> AuthResult<bool>;
}
