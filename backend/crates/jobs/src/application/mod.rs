//! Application Layer
//!
//! Job board use cases: public listing, posting, and admin moderation.

pub mod approve_job;
pub mod create_job;
pub mod delete_job;
pub mod list_jobs;

pub use approve_job::ApproveJobUseCase;
pub use create_job::{CreateJobInput, CreateJobUseCase};
pub use delete_job::DeleteJobUseCase;
pub use list_jobs::{ListPendingJobsUseCase, ListPublicJobsUseCase};
