//! Approve Job Use Case
//!
//! Pending -> Approved. Approving an already approved job succeeds again.

use std::sync::Arc;

use auth::{Identity, UserRole};
use kernel::id::JobId;

use crate::domain::entity::Job;
use crate::domain::repository::JobRepository;
use crate::error::{JobError, JobResult};

/// Approve job use case (admin only)
pub struct ApproveJobUseCase<R>
where
    R: JobRepository,
{
    repo: Arc<R>,
}

impl<R> ApproveJobUseCase<R>
where
    R: JobRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, identity: &Identity, job_id: JobId) -> JobResult<Job> {
        identity.require_role(UserRole::Admin)?;

        let job = self
            .repo
            .approve(job_id)
            .await?
            .ok_or(JobError::NotFound)?;

        tracing::info!(
            job_id = %job.job_id,
            admin_id = %identity.user_id,
            "Job approved"
        );

        Ok(job)
    }
}
