//! List Jobs Use Cases

use std::sync::Arc;

use auth::{Identity, UserRole};
use kernel::filter::ListFilter;

use crate::domain::entity::Job;
use crate::domain::repository::JobRepository;
use crate::error::JobResult;

/// 公開求人一覧（承認済みのみ）
pub struct ListPublicJobsUseCase<R>
where
    R: JobRepository,
{
    repo: Arc<R>,
}

impl<R> ListPublicJobsUseCase<R>
where
    R: JobRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, filter: ListFilter) -> JobResult<Vec<Job>> {
        self.repo.list_approved(&filter).await
    }
}

/// モデレーション待ち一覧（管理者のみ）
pub struct ListPendingJobsUseCase<R>
where
    R: JobRepository,
{
    repo: Arc<R>,
}

impl<R> ListPendingJobsUseCase<R>
where
    R: JobRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, identity: &Identity) -> JobResult<Vec<Job>> {
        identity.require_role(UserRole::Admin)?;

        let jobs = self.repo.list_pending().await?;

        tracing::debug!(count = jobs.len(), "Pending jobs listed");

        Ok(jobs)
    }
}
