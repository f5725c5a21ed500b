//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases, token service
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, access guard
//!
//! ## Features
//! - Registration with username + email + password (auto-login)
//! - Login by username + password
//! - Stateless HS256 bearer tokens valid for 24 hours
//! - Role-based access (User, Admin) for the other crates' routes
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, random salt per password
//! - Login failures are indistinguishable to the client
//! - Missing token is 401, bad or expired token is 403

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::{Identity, TokenService};
pub use domain::value_object::UserRole;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::guard::{AdminUser, AuthUser};
pub use presentation::router::auth_router;
