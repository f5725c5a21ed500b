//! Jobs (Job Board) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Job entity, moderation status, repository trait
//! - `application/` - Listing, posting and moderation use cases
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Moderation
//! - New postings are `Pending` and hidden from the public board
//! - An admin approves (`Pending -> Approved`, idempotent) or deletes
//! - There is no way back to `Pending`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::value_object::JobStatus;
pub use error::{JobError, JobResult};
pub use infra::postgres::PgJobRepository;
pub use presentation::router::{jobs_admin_router, jobs_router};

#[cfg(test)]
mod tests;
