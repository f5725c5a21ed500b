//! PostgreSQL Repository Implementations
//!
//! Writes that must come back with the poster's username run as one
//! statement: a data-modifying CTE joined with `users`.

use chrono::{DateTime, Utc};
use kernel::filter::ListFilter;
use kernel::id::{JobId, UserId};
use sqlx::PgPool;

use crate::domain::entity::{Job, NewJob};
use crate::domain::repository::JobRepository;
use crate::domain::value_object::JobStatus;
use crate::error::JobResult;

/// PostgreSQL-backed job repository
#[derive(Clone)]
pub struct PgJobRepository {
    pool: PgPool,
}

impl PgJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl JobRepository for PgJobRepository {
    async fn list_approved(&self, filter: &ListFilter) -> JobResult<Vec<Job>> {
        let rows = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT j.id, j.title, j.description, j.salary, j.category, j.company,
                   j.user_id, j.approved, j.created_at, u.username
            FROM jobs j
            JOIN users u ON u.id = j.user_id
            WHERE j.approved = TRUE
              AND ($1::TEXT IS NULL OR j.title ILIKE $1)
              AND ($2::TEXT IS NULL OR j.category = $2)
            ORDER BY j.created_at DESC, j.id DESC
            "#,
        )
        .bind(filter.search_pattern())
        .bind(filter.category())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(JobRow::into_job).collect())
    }

    async fn list_pending(&self) -> JobResult<Vec<Job>> {
        let rows = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT j.id, j.title, j.description, j.salary, j.category, j.company,
                   j.user_id, j.approved, j.created_at, u.username
            FROM jobs j
            JOIN users u ON u.id = j.user_id
            WHERE j.approved = FALSE
            ORDER BY j.created_at DESC, j.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(JobRow::into_job).collect())
    }

    async fn create(&self, job: &NewJob) -> JobResult<Job> {
        let row = sqlx::query_as::<_, JobRow>(
            r#"
            WITH inserted AS (
                INSERT INTO jobs (title, description, salary, category, company, user_id)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id, title, description, salary, category, company,
                          user_id, approved, created_at
            )
            SELECT j.id, j.title, j.description, j.salary, j.category, j.company,
                   j.user_id, j.approved, j.created_at, u.username
            FROM inserted j
            JOIN users u ON u.id = j.user_id
            "#,
        )
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.salary)
        .bind(&job.category)
        .bind(&job.company)
        .bind(job.owner_id.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_job())
    }

    async fn approve(&self, job_id: JobId) -> JobResult<Option<Job>> {
        let row = sqlx::query_as::<_, JobRow>(
            r#"
            WITH updated AS (
                UPDATE jobs SET approved = TRUE
                WHERE id = $1
                RETURNING id, title, description, salary, category, company,
                          user_id, approved, created_at
            )
            SELECT j.id, j.title, j.description, j.salary, j.category, j.company,
                   j.user_id, j.approved, j.created_at, u.username
            FROM updated j
            JOIN users u ON u.id = j.user_id
            "#,
        )
        .bind(job_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(JobRow::into_job))
    }

    async fn delete(&self, job_id: JobId) -> JobResult<Option<JobStatus>> {
        let approved =
            sqlx::query_scalar::<_, bool>("DELETE FROM jobs WHERE id = $1 RETURNING approved")
                .bind(job_id.value())
                .fetch_optional(&self.pool)
                .await?;

        Ok(approved.map(JobStatus::from_approved))
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct JobRow {
    id: i64,
    title: String,
    description: String,
    salary: String,
    category: String,
    company: String,
    user_id: i64,
    approved: bool,
    created_at: DateTime<Utc>,
    username: String,
}

impl JobRow {
    fn into_job(self) -> Job {
        Job {
            job_id: JobId::new(self.id),
            title: self.title,
            description: self.description,
            salary: self.salary,
            category: self.category,
            company: self.company,
            owner_id: UserId::new(self.user_id),
            owner_username: self.username,
            status: JobStatus::from_approved(self.approved),
            created_at: self.created_at,
        }
    }
}
