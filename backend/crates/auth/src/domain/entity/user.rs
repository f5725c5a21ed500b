//! User Entity
//!
//! A registered account. Accounts are created by sign-up (or the first-boot
//! seed) and never deleted by this service.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::{Email, UserName, UserRole};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Database key
    pub user_id: UserId,
    pub username: UserName,
    pub email: Email,
    /// Argon2id PHC string
    pub password_hash: HashedPassword,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

/// A user that has not been persisted yet
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: UserName,
    pub email: Email,
    pub password_hash: HashedPassword,
    pub role: UserRole,
}

impl NewUser {
    /// Self-registered accounts always start as `user`.
    pub fn registration(username: UserName, email: Email, password_hash: HashedPassword) -> Self {
        Self {
            username,
            email,
            password_hash,
            role: UserRole::User,
        }
    }
}
