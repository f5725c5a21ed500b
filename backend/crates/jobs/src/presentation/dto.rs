//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::{JobId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::entity::Job;

/// POST /api/jobs
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

/// Job posting as returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct JobResponse {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub salary: String,
    pub category: String,
    pub company: String,
    pub user_id: UserId,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
    /// Poster's username
    pub username: String,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            id: job.job_id,
            title: job.title,
            description: job.description,
            salary: job.salary,
            category: job.category,
            company: job.company,
            user_id: job.owner_id,
            approved: job.status.is_approved(),
            created_at: job.created_at,
            username: job.owner_username,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
