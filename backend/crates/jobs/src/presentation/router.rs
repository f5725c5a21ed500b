//! Job Board Routers
//!
//! Two routers over the same repository: the public board (mounted at
//! `/api/jobs`) and the moderation queue (mounted at `/api/admin/jobs`).

use axum::{
    Router,
    routing::{delete, get, put},
};
use std::sync::Arc;

use auth::TokenService;

use crate::domain::repository::JobRepository;
use crate::infra::postgres::PgJobRepository;
use crate::presentation::handlers::{self, JobsAppState};

/// Public job board with PostgreSQL repository
pub fn jobs_router(repo: PgJobRepository, tokens: Arc<TokenService>) -> Router {
    jobs_router_generic(repo, tokens)
}

/// Moderation routes with PostgreSQL repository
pub fn jobs_admin_router(repo: PgJobRepository, tokens: Arc<TokenService>) -> Router {
    jobs_admin_router_generic(repo, tokens)
}

pub fn jobs_router_generic<R>(repo: R, tokens: Arc<TokenService>) -> Router
where
    R: JobRepository + Clone + Send + Sync + 'static,
{
    let state = JobsAppState {
        repo: Arc::new(repo),
        tokens,
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_public_jobs::<R>).post(handlers::create_job::<R>),
        )
        .with_state(state)
}

pub fn jobs_admin_router_generic<R>(repo: R, tokens: Arc<TokenService>) -> Router
where
    R: JobRepository + Clone + Send + Sync + 'static,
{
    let state = JobsAppState {
        repo: Arc::new(repo),
        tokens,
    };

    Router::new()
        .route("/", get(handlers::list_pending_jobs::<R>))
        .route("/{id}/approve", put(handlers::approve_job::<R>))
        .route("/{id}", delete(handlers::delete_job::<R>))
        .with_state(state)
}
