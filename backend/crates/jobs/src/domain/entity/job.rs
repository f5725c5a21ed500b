//! Job Posting Entity

use chrono::{DateTime, Utc};
use kernel::id::{JobId, UserId};
use kernel::validation::non_blank;

use crate::domain::value_object::JobStatus;
use crate::error::{JobError, JobResult};

/// Job posting, joined with the poster's username
#[derive(Debug, Clone)]
pub struct Job {
    pub job_id: JobId,
    pub title: String,
    pub description: String,
    /// Free text, e.g. "от 80 000 руб."
    pub salary: String,
    pub category: String,
    pub company: String,
    pub owner_id: UserId,
    pub owner_username: String,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
}

/// A validated posting; always stored as [`JobStatus::Pending`]
#[derive(Debug, Clone)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub salary: String,
    pub category: String,
    pub company: String,
    pub owner_id: UserId,
}

impl NewJob {
    pub fn new(
        owner_id: UserId,
        title: Option<String>,
        description: Option<String>,
        salary: Option<String>,
        category: Option<String>,
        company: Option<String>,
    ) -> JobResult<Self> {
        let (Some(title), Some(description), Some(salary), Some(category), Some(company)) = (
            non_blank(title),
            non_blank(description),
            non_blank(salary),
            non_blank(category),
            non_blank(company),
        ) else {
            return Err(JobError::MissingFields);
        };

        // Column widths in the jobs table
        check_length("title", &title, 100)?;
        check_length("salary", &salary, 50)?;
        check_length("category", &category, 50)?;
        check_length("company", &company, 100)?;

        Ok(Self {
            title,
            description,
            salary,
            category,
            company,
            owner_id,
        })
    }
}

fn check_length(field: &str, value: &str, max: usize) -> JobResult<()> {
    if value.chars().count() > max {
        return Err(JobError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}
