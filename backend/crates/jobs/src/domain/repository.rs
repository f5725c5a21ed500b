//! Repository Traits

use kernel::filter::ListFilter;
use kernel::id::JobId;

use crate::domain::entity::{Job, NewJob};
use crate::domain::value_object::JobStatus;
use crate::error::JobResult;

/// Job repository trait
///
/// Every returned [`Job`] carries the poster's username.
#[trait_variant::make(JobRepository: Send)]
pub trait LocalJobRepository {
    /// Approved jobs, newest first, filtered by title substring and category
    async fn list_approved(&self, filter: &ListFilter) -> JobResult<Vec<Job>>;

    /// Jobs awaiting moderation, newest first
    async fn list_pending(&self) -> JobResult<Vec<Job>>;

    async fn create(&self, job: &NewJob) -> JobResult<Job>;

    /// Mark as approved; `None` if the job does not exist
    async fn approve(&self, job_id: JobId) -> JobResult<Option<Job>>;

    /// Remove the job and return the status it had; `None` if it did not exist
    async fn delete(&self, job_id: JobId) -> JobResult<Option<JobStatus>>;
}
