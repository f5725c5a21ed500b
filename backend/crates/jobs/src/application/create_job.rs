//! Create Job Use Case
//!
//! Any authenticated user may post. The posting stays invisible to the
//! public listing until an admin approves it.

use std::sync::Arc;

use auth::Identity;

use crate::domain::entity::{Job, NewJob};
use crate::domain::repository::JobRepository;
use crate::error::JobResult;

/// Create job input
pub struct CreateJobInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub salary: Option<String>,
    pub category: Option<String>,
    pub company: Option<String>,
}

/// Create job use case
pub struct CreateJobUseCase<R>
where
    R: JobRepository,
{
    repo: Arc<R>,
}

impl<R> CreateJobUseCase<R>
where
    R: JobRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, identity: &Identity, input: CreateJobInput) -> JobResult<Job> {
        let new_job = NewJob::new(
            identity.user_id,
            input.title,
            input.description,
            input.salary,
            input.category,
            input.company,
        )?;

        let job = self.repo.create(&new_job).await?;

        tracing::info!(
            job_id = %job.job_id,
            user_id = %identity.user_id,
            "Job submitted for moderation"
        );

        Ok(job)
    }
}
