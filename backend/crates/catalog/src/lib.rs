//! Catalog (Product) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Product entity, price value object, repository trait
//! - `application/` - List / create / update / delete use cases
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Listing is public. Mutations require an admin bearer token.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::entity::PLACEHOLDER_IMAGE;
pub use error::{CatalogError, CatalogResult};
pub use infra::postgres::PgProductRepository;
pub use presentation::router::catalog_router;
