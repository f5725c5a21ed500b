//! Delete Job Use Case
//!
//! Covers both rejecting a pending posting and taking down an approved one.

use std::sync::Arc;

use auth::{Identity, UserRole};
use kernel::id::JobId;

use crate::domain::repository::JobRepository;
use crate::domain::value_object::JobStatus;
use crate::error::{JobError, JobResult};

/// Delete job use case (admin only)
pub struct DeleteJobUseCase<R>
where
    R: JobRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteJobUseCase<R>
where
    R: JobRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Returns the status the job had before deletion
    pub async fn execute(&self, identity: &Identity, job_id: JobId) -> JobResult<JobStatus> {
        identity.require_role(UserRole::Admin)?;

        let previous = self
            .repo
            .delete(job_id)
            .await?
            .ok_or(JobError::NotFound)?;

        match previous {
            JobStatus::Pending => tracing::info!(
                job_id = %job_id,
                admin_id = %identity.user_id,
                "Job rejected"
            ),
            JobStatus::Approved => tracing::info!(
                job_id = %job_id,
                admin_id = %identity.user_id,
                "Approved job removed"
            ),
        }

        Ok(previous)
    }
}
