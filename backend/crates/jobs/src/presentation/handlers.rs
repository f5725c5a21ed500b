//! HTTP Handlers

use axum::Json;
use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use auth::{AuthUser, TokenService};
use kernel::extract::{AppJson, AppPath, AppQuery};
use kernel::filter::{ListFilter, ListQuery};
use kernel::id::JobId;
use std::sync::Arc;

use crate::application::{
    ApproveJobUseCase, CreateJobInput, CreateJobUseCase, DeleteJobUseCase,
    ListPendingJobsUseCase, ListPublicJobsUseCase,
};
use crate::domain::entity::Job;
use crate::domain::repository::JobRepository;
use crate::error::JobResult;
use crate::presentation::dto::{JobRequest, JobResponse, MessageResponse};

/// Shared state for job board handlers
#[derive(Clone)]
pub struct JobsAppState<R>
where
    R: JobRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
}

impl<R> FromRef<JobsAppState<R>> for Arc<TokenService>
where
    R: JobRepository + Clone + Send + Sync + 'static,
{
    fn from_ref(state: &JobsAppState<R>) -> Self {
        state.tokens.clone()
    }
}

fn to_responses(jobs: Vec<Job>) -> Vec<JobResponse> {
    jobs.into_iter().map(JobResponse::from).collect()
}

/// GET /api/jobs
pub async fn list_public_jobs<R>(
    State(state): State<JobsAppState<R>>,
    AppQuery(query): AppQuery<ListQuery>,
) -> JobResult<Json<Vec<JobResponse>>>
where
    R: JobRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListPublicJobsUseCase::new(state.repo.clone());
    let jobs = use_case.execute(ListFilter::from(query)).await?;

    Ok(Json(to_responses(jobs)))
}

/// POST /api/jobs
pub async fn create_job<R>(
    State(state): State<JobsAppState<R>>,
    AuthUser(identity): AuthUser,
    AppJson(req): AppJson<JobRequest>,
) -> JobResult<(StatusCode, Json<JobResponse>)>
where
    R: JobRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateJobUseCase::new(state.repo.clone());

    let job = use_case
        .execute(
            &identity,
            CreateJobInput {
                title: req.title,
                description: req.description,
                salary: req.salary,
                category: req.category,
                company: req.company,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(JobResponse::from(job))))
}

/// GET /api/admin/jobs
pub async fn list_pending_jobs<R>(
    State(state): State<JobsAppState<R>>,
    AuthUser(identity): AuthUser,
) -> JobResult<Json<Vec<JobResponse>>>
where
    R: JobRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListPendingJobsUseCase::new(state.repo.clone());
    let jobs = use_case.execute(&identity).await?;

    Ok(Json(to_responses(jobs)))
}

/// PUT /api/admin/jobs/{id}/approve
pub async fn approve_job<R>(
    State(state): State<JobsAppState<R>>,
    AuthUser(identity): AuthUser,
    AppPath(id): AppPath<i64>,
) -> JobResult<Json<JobResponse>>
where
    R: JobRepository + Clone + Send + Sync + 'static,
{
    let use_case = ApproveJobUseCase::new(state.repo.clone());
    let job = use_case.execute(&identity, JobId::new(id)).await?;

    Ok(Json(JobResponse::from(job)))
}

/// DELETE /api/admin/jobs/{id}
pub async fn delete_job<R>(
    State(state): State<JobsAppState<R>>,
    AuthUser(identity): AuthUser,
    AppPath(id): AppPath<i64>,
) -> JobResult<Json<MessageResponse>>
where
    R: JobRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteJobUseCase::new(state.repo.clone());
    use_case.execute(&identity, JobId::new(id)).await?;

    Ok(Json(MessageResponse {
        message: "job deleted",
    }))
}
